//! The authoritative clothing category table.
//!
//! One table drives both halves of categorization: mapping a category id to
//! the mannequin region it is fitted against, and inferring a category from a
//! free-text result title. Keeping these in one place guarantees an item is
//! fitted the same way it was categorized.

use serde::{Deserialize, Serialize};

/// Mannequin body zone a garment is scaled against.
///
/// Accessories have no region: they are sized independently of body
/// measurements, so anything not coverable by a region (accessories, unknown
/// categories) resolves to `None` and is exempt from scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitRegion {
    Upper,
    Lower,
    Full,
    Feet,
}

pub struct CategoryDef {
    pub id: &'static str,
    pub display_name: &'static str,
    pub region: Option<FitRegion>,
    /// Title keywords for category inference. Order of table entries encodes
    /// inference precedence; an empty list means the category is never
    /// inferred from text.
    pub keywords: &'static [&'static str],
}

/// Declaration order is inference precedence. `tops` carries no keywords and
/// acts as the fallback.
pub const CLOTHING_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        id: "dresses",
        display_name: "Dresses",
        region: Some(FitRegion::Full),
        keywords: &["dress", "gown"],
    },
    CategoryDef {
        id: "bottoms",
        display_name: "Bottoms",
        region: Some(FitRegion::Lower),
        keywords: &["skirt", "pants", "jeans", "leggings", "shorts"],
    },
    CategoryDef {
        id: "outerwear",
        display_name: "Outerwear",
        region: Some(FitRegion::Upper),
        keywords: &["jacket", "coat", "blazer", "cardigan"],
    },
    CategoryDef {
        id: "footwear",
        display_name: "Footwear",
        region: Some(FitRegion::Feet),
        keywords: &["sneaker", "boot", "heel", "sandal", "shoe"],
    },
    CategoryDef {
        id: "accessories",
        display_name: "Accessories",
        region: None,
        keywords: &["hat", "belt", "scarf", "necklace", "handbag"],
    },
    CategoryDef {
        id: "activewear",
        display_name: "Activewear",
        region: Some(FitRegion::Full),
        keywords: &["sports bra", "athletic"],
    },
    CategoryDef {
        id: "swimwear",
        display_name: "Swimwear",
        region: Some(FitRegion::Full),
        keywords: &["bikini", "swimsuit"],
    },
    CategoryDef {
        id: "formalwear",
        display_name: "Formalwear",
        region: Some(FitRegion::Full),
        keywords: &["tuxedo"],
    },
    CategoryDef {
        id: "lingerie",
        display_name: "Lingerie",
        region: Some(FitRegion::Full),
        keywords: &["lingerie"],
    },
    CategoryDef {
        id: "tops",
        display_name: "Tops",
        region: Some(FitRegion::Upper),
        keywords: &[],
    },
];

/// Look up the fit region for a category id. Unknown categories and
/// accessories give `None`: not scalable, never an error.
pub fn resolve_fit_region(category: &str) -> Option<FitRegion> {
    CLOTHING_CATEGORIES
        .iter()
        .find(|def| def.id == category)
        .and_then(|def| def.region)
}

/// Infer a category id from a free-text item title. First keyword match in
/// table order wins; titles matching nothing are classified as `tops`.
pub fn infer_category(title: &str) -> &'static str {
    let title = title.to_lowercase();

    for def in CLOTHING_CATEGORIES {
        if def.keywords.iter().any(|kw| title.contains(kw)) {
            return def.id;
        }
    }

    "tops"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_fit_region_table() {
        assert_eq!(resolve_fit_region("tops"), Some(FitRegion::Upper));
        assert_eq!(resolve_fit_region("bottoms"), Some(FitRegion::Lower));
        assert_eq!(resolve_fit_region("dresses"), Some(FitRegion::Full));
        assert_eq!(resolve_fit_region("outerwear"), Some(FitRegion::Upper));
        assert_eq!(resolve_fit_region("footwear"), Some(FitRegion::Feet));
        assert_eq!(resolve_fit_region("activewear"), Some(FitRegion::Full));
        assert_eq!(resolve_fit_region("swimwear"), Some(FitRegion::Full));
        assert_eq!(resolve_fit_region("formalwear"), Some(FitRegion::Full));
        assert_eq!(resolve_fit_region("lingerie"), Some(FitRegion::Full));
    }

    #[test]
    fn test_accessories_have_no_region() {
        assert_eq!(resolve_fit_region("accessories"), None);
    }

    #[test]
    fn test_unknown_category_has_no_region() {
        assert_eq!(resolve_fit_region("unknown-xyz"), None);
        assert_eq!(resolve_fit_region(""), None);
    }

    #[test]
    fn test_infer_category_keywords() {
        assert_eq!(infer_category("Floral Summer Dress"), "dresses");
        assert_eq!(infer_category("Slim Fit Jeans"), "bottoms");
        assert_eq!(infer_category("Denim Jacket"), "outerwear");
        assert_eq!(infer_category("Leather Ankle Boots"), "footwear");
        assert_eq!(infer_category("Silk Scarf"), "accessories");
        assert_eq!(infer_category("Classic White T-Shirt"), "tops");
    }

    #[test]
    fn test_infer_category_precedence() {
        // "dress" outranks everything else in the title
        assert_eq!(infer_category("Dress with Jacket Print"), "dresses");
        // bottoms outrank footwear, so bootcut jeans stay bottoms
        assert_eq!(infer_category("Bootcut Jeans"), "bottoms");
    }

    #[test]
    fn test_infer_category_falls_back_to_tops() {
        assert_eq!(infer_category(""), "tops");
        assert_eq!(infer_category("Mystery Garment"), "tops");
    }

    #[test]
    fn test_inference_agrees_with_region_resolution() {
        // Every inferable id must exist in the region table; this is the
        // divergence the shared table exists to prevent.
        for def in CLOTHING_CATEGORIES {
            for kw in def.keywords {
                let inferred = infer_category(kw);
                assert!(
                    CLOTHING_CATEGORIES.iter().any(|d| d.id == inferred),
                    "inferred id {} missing from table",
                    inferred
                );
            }
        }
    }
}
