//! Fitting a clothing item to a measurement profile.
//!
//! The engine never mutates the source item: it derives a new [`FittedItem`]
//! whose style is the item's base style composed with the region factors.
//! Callers must always fit from the canonical unfitted item; refitting an
//! already-fitted copy would compound the factors.

use crate::domain::categories::{resolve_fit_region, FitRegion};
use crate::domain::model::{ClothingItem, FittedItem, ScaleStyle};
use crate::fit::scaling::{compute_scaling_factors, MeasurementProfile, ScalingFactorSet};

/// A base scale that is missing or degenerate (NaN, infinite, ≤ 0) counts as
/// identity, so malformed styles degrade to "natural size" instead of
/// propagating garbage.
fn base_scale(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        1.0
    }
}

fn base_extra(value: Option<f64>) -> f64 {
    base_scale(value.unwrap_or(1.0))
}

/// Fit one item to a profile. Items with no fit region (accessories, unknown
/// categories) are returned with their style untouched.
pub fn fit_item_to_profile(item: &ClothingItem, profile: &MeasurementProfile) -> FittedItem {
    let factors = compute_scaling_factors(profile);
    fit_item_with_factors(item, &factors)
}

/// Fit against an already-computed factor set. Used when one profile change
/// is applied to many items, so the factors are computed once.
pub fn fit_item_with_factors(item: &ClothingItem, factors: &ScalingFactorSet) -> FittedItem {
    let Some(region) = resolve_fit_region(&item.category) else {
        return FittedItem {
            item: item.clone(),
            style: item.style,
        };
    };

    let width = base_scale(item.style.width_scale);
    let height = base_scale(item.style.height_scale);

    let style = match region {
        FitRegion::Upper => ScaleStyle {
            width_scale: width * factors.upper.width,
            height_scale: height * factors.upper.length,
            shoulder_width_scale: Some(
                base_extra(item.style.shoulder_width_scale) * factors.upper.shoulders,
            ),
            waist_width_scale: item.style.waist_width_scale,
        },
        FitRegion::Lower => ScaleStyle {
            width_scale: width * factors.lower.width,
            height_scale: height * factors.lower.length,
            shoulder_width_scale: item.style.shoulder_width_scale,
            waist_width_scale: Some(base_extra(item.style.waist_width_scale) * factors.lower.waist),
        },
        FitRegion::Full => ScaleStyle {
            width_scale: width * factors.full.width,
            height_scale: height * factors.full.length,
            shoulder_width_scale: item.style.shoulder_width_scale,
            waist_width_scale: Some(base_extra(item.style.waist_width_scale) * factors.full.waist),
        },
        // The feet record carries no width/length factor; footwear keeps its
        // base scales.
        FitRegion::Feet => ScaleStyle {
            width_scale: width,
            height_scale: height,
            shoulder_width_scale: item.style.shoulder_width_scale,
            waist_width_scale: item.style.waist_width_scale,
        },
    };

    FittedItem {
        item: item.clone(),
        style,
    }
}
