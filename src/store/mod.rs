//! Per-user saved-items collection.

pub mod cache;

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::model::{ClothingItem, SavedItem};
use crate::domain::ports::CollectionStore;
use crate::utils::error::Result;

pub use cache::SavedIdCache;

const MAX_DOCUMENT_ID_LEN: usize = 120;

/// Normalize an item id into a storage-safe document id. Item ids are often
/// full URLs; runs of non-alphanumeric characters collapse to a single dash
/// so the same item always maps to the same document.
pub fn safe_document_id(raw_id: &str) -> String {
    let mut doc_id = String::with_capacity(raw_id.len());
    let mut pending_dash = false;

    for c in raw_id.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !doc_id.is_empty() {
                doc_id.push('-');
            }
            doc_id.push(c.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    doc_id.truncate(MAX_DOCUMENT_ID_LEN);
    if doc_id.ends_with('-') {
        doc_id.pop();
    }
    if doc_id.is_empty() {
        "item".to_string()
    } else {
        doc_id
    }
}

/// In-memory collection store: a per-user document map plus the injected
/// saved-id cache. The cache entry for a user is dropped on every add and
/// remove and rebuilt lazily on the next id lookup.
pub struct MemoryStore {
    items: Mutex<HashMap<String, HashMap<String, SavedItem>>>,
    cache: Mutex<SavedIdCache>,
}

impl MemoryStore {
    pub fn new(cache: SavedIdCache) -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
            cache: Mutex::new(cache),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(SavedIdCache::new())
    }
}

impl CollectionStore for MemoryStore {
    async fn fetch_saved_items(&self, user_id: &str) -> Result<Vec<SavedItem>> {
        let items = self.items.lock().await;
        let mut saved: Vec<SavedItem> = items
            .get(user_id)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default();
        // newest first, stable across equal timestamps
        saved.sort_by(|a, b| b.saved_at.cmp(&a.saved_at).then(a.item.id.cmp(&b.item.id)));
        Ok(saved)
    }

    async fn add_item(&self, user_id: &str, item: ClothingItem) -> Result<()> {
        let doc_id = safe_document_id(&item.id);
        tracing::debug!("Saving item '{}' for user '{}'", doc_id, user_id);

        let mut items = self.items.lock().await;
        items.entry(user_id.to_string()).or_default().insert(
            doc_id,
            SavedItem {
                item,
                saved_at: Utc::now(),
            },
        );

        self.cache.lock().await.invalidate(user_id);
        Ok(())
    }

    async fn remove_item(&self, user_id: &str, doc_id: &str) -> Result<()> {
        tracing::debug!("Removing item '{}' for user '{}'", doc_id, user_id);

        let mut items = self.items.lock().await;
        if let Some(docs) = items.get_mut(user_id) {
            docs.remove(doc_id);
        }

        self.cache.lock().await.invalidate(user_id);
        Ok(())
    }

    async fn get_item(&self, doc_id: &str) -> Result<Option<ClothingItem>> {
        let items = self.items.lock().await;
        for docs in items.values() {
            if let Some(saved) = docs.get(doc_id) {
                return Ok(Some(saved.item.clone()));
            }
        }
        Ok(None)
    }

    async fn saved_item_ids(&self, user_id: &str) -> Result<HashSet<String>> {
        {
            let cache = self.cache.lock().await;
            if let Some(ids) = cache.get(user_id) {
                return Ok(ids.clone());
            }
        }

        let items = self.items.lock().await;
        let ids: HashSet<String> = items
            .get(user_id)
            .map(|docs| docs.keys().cloned().collect())
            .unwrap_or_default();

        self.cache.lock().await.put(user_id, ids.clone());
        Ok(ids)
    }
}
