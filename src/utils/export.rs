use crate::domain::model::FittedItem;
use crate::utils::error::Result;

/// Render fitted items as CSV, one row per item, scale columns last. Region
/// extras that do not apply to an item are left empty.
pub fn fitted_items_to_csv(items: &[FittedItem]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record([
        "id",
        "name",
        "brand",
        "price",
        "category",
        "image_url",
        "width_scale",
        "height_scale",
        "shoulder_width_scale",
        "waist_width_scale",
    ])?;

    for fitted in items {
        let style = &fitted.style;
        writer.write_record([
            fitted.item.id.as_str(),
            fitted.item.name.as_str(),
            fitted.item.brand.as_str(),
            &fitted.item.price.to_string(),
            fitted.item.category.as_str(),
            fitted.item.image_url.as_str(),
            &style.width_scale.to_string(),
            &style.height_scale.to_string(),
            &style
                .shoulder_width_scale
                .map(|v| v.to_string())
                .unwrap_or_default(),
            &style
                .waist_width_scale
                .map(|v| v.to_string())
                .unwrap_or_default(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
