pub mod config;
pub mod domain;
pub mod fit;
pub mod search;
pub mod store;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;
pub use domain::categories::{infer_category, resolve_fit_region, FitRegion, CLOTHING_CATEGORIES};
pub use domain::model::{ClothingItem, FittedItem, ItemSource, SavedItem, ScaleStyle};
pub use fit::{
    compute_scaling_factors, fit_item_to_profile, MeasurementProfile, ScalingFactorSet,
    TryOnSession, WornOutfit,
};
pub use search::SearchAggregator;
pub use store::{safe_document_id, MemoryStore, SavedIdCache};
pub use utils::error::{FitRoomError, Result};
