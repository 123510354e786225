use crate::domain::model::{ClothingItem, SavedItem};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;

/// One upstream image-search backend. Object-safe so the aggregator can hold
/// a heterogeneous provider list.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    fn name(&self) -> &'static str;
    async fn search(&self, query: &str) -> Result<Vec<ClothingItem>>;
}

/// Per-user saved-items collection. Document ids are normalized item ids
/// (see `store::safe_document_id`).
pub trait CollectionStore: Send + Sync {
    fn fetch_saved_items(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<SavedItem>>> + Send;
    fn add_item(
        &self,
        user_id: &str,
        item: ClothingItem,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove_item(
        &self,
        user_id: &str,
        doc_id: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn get_item(
        &self,
        doc_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<ClothingItem>>> + Send;
    fn saved_item_ids(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<HashSet<String>>> + Send;
}

/// Read-only view of the search settings, implemented by both the CLI and
/// TOML configurations.
pub trait SearchConfig: Send + Sync {
    fn web_endpoint(&self) -> &str;
    fn web_api_key(&self) -> Option<&str>;
    fn web_engine_id(&self) -> Option<&str>;
    fn pinterest_endpoint(&self) -> &str;
    fn pinterest_token(&self) -> Option<&str>;
    fn result_limit(&self) -> usize;
}
