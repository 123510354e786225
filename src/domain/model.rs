use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a clothing item was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemSource {
    Web,
    Pinterest,
    Catalog,
}

/// Presentation scale record attached to a clothing item.
///
/// Scales are dimensionless multipliers relative to the item's natural
/// rendered size. The identity record (all 1.0, no region extras) means
/// "render as-is". Rendering code turns this into concrete CSS via
/// [`ScaleStyle::to_css_properties`]; the fit engine only composes the
/// numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScaleStyle {
    pub width_scale: f64,
    pub height_scale: f64,
    pub shoulder_width_scale: Option<f64>,
    pub waist_width_scale: Option<f64>,
}

impl Default for ScaleStyle {
    fn default() -> Self {
        Self {
            width_scale: 1.0,
            height_scale: 1.0,
            shoulder_width_scale: None,
            waist_width_scale: None,
        }
    }
}

impl ScaleStyle {
    /// Render the record as CSS-style declarations for a web presentation
    /// layer. Width/height become calc() expressions against the item's
    /// natural size; region extras are emitted only when present.
    pub fn to_css_properties(&self) -> Vec<(&'static str, String)> {
        let mut props = vec![
            ("width", format!("calc(100% * {})", self.width_scale)),
            ("height", format!("calc(100% * {})", self.height_scale)),
        ];
        if let Some(shoulders) = self.shoulder_width_scale {
            props.push(("shoulderWidth", format!("calc(100% * {})", shoulders)));
        }
        if let Some(waist) = self.waist_width_scale {
            props.push(("waistWidth", format!("calc(100% * {})", waist)));
        }
        props
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub source: ItemSource,
    #[serde(default)]
    pub style: ScaleStyle,
}

/// A clothing item fitted to a measurement profile: the source item plus the
/// computed presentation scales. Always derived from the canonical item and
/// replaced wholesale on recomputation, never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FittedItem {
    pub item: ClothingItem,
    pub style: ScaleStyle,
}

/// A collection entry: the saved item and when it was saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub item: ClothingItem,
    pub saved_at: DateTime<Utc>,
}
