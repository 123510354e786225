//! Saved-document-id cache.
//!
//! An explicit cache object owned by the collection store, keyed by user.
//! An absent entry means "not loaded yet", never "no saved items" — callers
//! must distinguish a miss from an empty set. The store invalidates a user's
//! entry on every add and remove.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct SavedIdCache {
    by_user: HashMap<String, HashSet<String>>,
}

impl SavedIdCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, user_id: &str) -> Option<&HashSet<String>> {
        self.by_user.get(user_id)
    }

    pub fn put(&mut self, user_id: &str, ids: HashSet<String>) {
        self.by_user.insert(user_id.to_string(), ids);
    }

    pub fn invalidate(&mut self, user_id: &str) {
        self.by_user.remove(user_id);
    }

    pub fn clear(&mut self) {
        self.by_user.clear();
    }
}
