pub mod engine;
pub mod outfit;
pub mod scaling;

pub use engine::{fit_item_to_profile, fit_item_with_factors};
pub use outfit::{TryOnSession, WornOutfit};
pub use scaling::{compute_scaling_factors, MeasurementProfile, ScalingFactorSet, REFERENCE_PROFILE};
