//! Measurement profiles and region scale factors.
//!
//! All ratios are dimensionless: measured value divided by the reference
//! value for the same measurement. A profile equal to the reference yields
//! 1.0 everywhere.

use serde::{Deserialize, Serialize};

/// Body measurements in centimeters. Every field is optional; a field that
/// is absent, non-finite, or not strictly positive falls back to the
/// reference value on its own, independent of the other fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementProfile {
    pub height: Option<f64>,
    pub bust: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub inseam: Option<f64>,
    pub shoulders: Option<f64>,
}

impl MeasurementProfile {
    /// Field-wise overlay: fields present in `update` replace this profile's,
    /// absent fields keep their current value.
    pub fn merged_with(&self, update: &MeasurementProfile) -> MeasurementProfile {
        MeasurementProfile {
            height: update.height.or(self.height),
            bust: update.bust.or(self.bust),
            waist: update.waist.or(self.waist),
            hips: update.hips.or(self.hips),
            inseam: update.inseam.or(self.inseam),
            shoulders: update.shoulders.or(self.shoulders),
        }
    }
}

/// The fixed baseline measurement set (cm). Process-wide, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceProfile {
    pub height: f64,
    pub bust: f64,
    pub waist: f64,
    pub hips: f64,
    pub inseam: f64,
    pub shoulders: f64,
}

pub const REFERENCE_PROFILE: ReferenceProfile = ReferenceProfile {
    height: 170.0,
    bust: 90.0,
    waist: 70.0,
    hips: 95.0,
    inseam: 78.0,
    shoulders: 38.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UpperScaling {
    pub width: f64,
    pub length: f64,
    pub shoulders: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LowerScaling {
    pub width: f64,
    pub length: f64,
    pub waist: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FullScaling {
    pub width: f64,
    pub length: f64,
    pub waist: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeetScaling {
    pub size: f64,
}

/// Scale factors for every fittable region, derived from one profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScalingFactorSet {
    pub upper: UpperScaling,
    pub lower: LowerScaling,
    pub full: FullScaling,
    pub feet: FeetScaling,
}

/// Substitute the reference value for anything that cannot be used as a
/// divisor or multiplicand: missing, NaN, infinite, zero, or negative.
fn resolve_measurement(value: Option<f64>, reference: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => reference,
    }
}

/// Compute the full region factor set for a profile. Total and deterministic:
/// the fallback rule means there is no input for which this fails.
pub fn compute_scaling_factors(profile: &MeasurementProfile) -> ScalingFactorSet {
    let r = REFERENCE_PROFILE;

    let height = resolve_measurement(profile.height, r.height) / r.height;
    let bust = resolve_measurement(profile.bust, r.bust) / r.bust;
    let waist = resolve_measurement(profile.waist, r.waist) / r.waist;
    let hips = resolve_measurement(profile.hips, r.hips) / r.hips;
    let inseam = resolve_measurement(profile.inseam, r.inseam) / r.inseam;
    let shoulders = resolve_measurement(profile.shoulders, r.shoulders) / r.shoulders;

    ScalingFactorSet {
        upper: UpperScaling {
            width: bust,
            length: height,
            shoulders,
        },
        lower: LowerScaling {
            width: hips,
            length: inseam,
            waist,
        },
        full: FullScaling {
            // Single-piece garments balance upper and lower proportions:
            // the mean of the bust and hips ratios.
            width: (bust + hips) / 2.0,
            length: height,
            waist,
        },
        feet: FeetScaling { size: height },
    }
}
