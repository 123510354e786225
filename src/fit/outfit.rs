//! Worn-outfit state: at most one item per category slot.
//!
//! Each slot keeps the canonical source item next to its fitted copy.
//! Recomputation always starts from the source, so successive profile
//! changes never accumulate scaling.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::domain::model::{ClothingItem, FittedItem};
use crate::fit::engine::{fit_item_to_profile, fit_item_with_factors};
use crate::fit::scaling::{compute_scaling_factors, MeasurementProfile};

#[derive(Debug, Clone)]
struct WornSlot {
    source: ClothingItem,
    fitted: FittedItem,
}

/// Currently worn, fitted items keyed by category. A slot is either empty or
/// worn; trying on an item for an occupied slot replaces it entirely.
#[derive(Debug, Clone, Default)]
pub struct WornOutfit {
    slots: HashMap<String, WornSlot>,
}

impl WornOutfit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit `item` to `profile` and wear it, replacing whatever occupied its
    /// category slot.
    pub fn try_on(&mut self, item: &ClothingItem, profile: &MeasurementProfile) -> &FittedItem {
        let fitted = fit_item_to_profile(item, profile);
        let slot = WornSlot {
            source: item.clone(),
            fitted,
        };
        match self.slots.entry(item.category.clone()) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(slot);
                &occupied.into_mut().fitted
            }
            Entry::Vacant(vacant) => &vacant.insert(slot).fitted,
        }
    }

    /// Empty a category slot, returning the source item that was worn there.
    pub fn remove(&mut self, category: &str) -> Option<ClothingItem> {
        self.slots.remove(category).map(|slot| slot.source)
    }

    /// Re-fit every occupied slot against `profile`, from each slot's source
    /// item. Factors are computed once and applied to all slots; empty slots
    /// stay empty.
    pub fn recompute(&self, profile: &MeasurementProfile) -> WornOutfit {
        let factors = compute_scaling_factors(profile);
        let slots = self
            .slots
            .iter()
            .map(|(category, slot)| {
                let fitted = fit_item_with_factors(&slot.source, &factors);
                (
                    category.clone(),
                    WornSlot {
                        source: slot.source.clone(),
                        fitted,
                    },
                )
            })
            .collect();
        WornOutfit { slots }
    }

    pub fn fitted(&self, category: &str) -> Option<&FittedItem> {
        self.slots.get(category).map(|slot| &slot.fitted)
    }

    pub fn source(&self, category: &str) -> Option<&ClothingItem> {
        self.slots.get(category).map(|slot| &slot.source)
    }

    pub fn fitted_items(&self) -> impl Iterator<Item = &FittedItem> {
        self.slots.values().map(|slot| &slot.fitted)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Stateful try-on session: a measurement profile plus the outfit worn
/// against it. Measurement changes re-fit the whole outfit.
#[derive(Debug, Clone, Default)]
pub struct TryOnSession {
    profile: MeasurementProfile,
    outfit: WornOutfit,
}

impl TryOnSession {
    pub fn new(profile: MeasurementProfile) -> Self {
        Self {
            profile,
            outfit: WornOutfit::new(),
        }
    }

    pub fn try_on(&mut self, item: &ClothingItem) -> &FittedItem {
        self.outfit.try_on(item, &self.profile)
    }

    pub fn remove(&mut self, category: &str) -> Option<ClothingItem> {
        self.outfit.remove(category)
    }

    /// Overlay the supplied measurement fields onto the session profile and
    /// re-fit everything currently worn.
    pub fn set_measurements(&mut self, update: &MeasurementProfile) {
        self.profile = self.profile.merged_with(update);
        self.outfit = self.outfit.recompute(&self.profile);
    }

    pub fn profile(&self) -> &MeasurementProfile {
        &self.profile
    }

    pub fn outfit(&self) -> &WornOutfit {
        &self.outfit
    }
}
