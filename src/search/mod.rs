//! Search aggregation over the configured image-search providers.

pub mod pinterest;
pub mod web;

use crate::domain::model::ClothingItem;
use crate::domain::ports::{SearchConfig, SearchProvider};
use futures::future::join_all;

pub use pinterest::PinterestSearch;
pub use web::WebImageSearch;

/// Fans a query out to every configured provider and concatenates whatever
/// comes back. A failing provider costs its own results only.
pub struct SearchAggregator {
    providers: Vec<Box<dyn SearchProvider>>,
}

impl SearchAggregator {
    pub fn new(providers: Vec<Box<dyn SearchProvider>>) -> Self {
        Self { providers }
    }

    /// Build the provider list from configuration. Providers missing their
    /// credentials are skipped with a warning instead of failing startup.
    pub fn from_config(config: &dyn SearchConfig) -> Self {
        let mut providers: Vec<Box<dyn SearchProvider>> = Vec::new();

        match (config.web_api_key(), config.web_engine_id()) {
            (Some(api_key), Some(engine_id)) => {
                providers.push(Box::new(WebImageSearch::new(
                    config.web_endpoint().to_string(),
                    api_key.to_string(),
                    engine_id.to_string(),
                    config.result_limit(),
                )));
            }
            _ => tracing::warn!("Web search API key or engine id not configured, skipping provider"),
        }

        match config.pinterest_token() {
            Some(token) => {
                providers.push(Box::new(PinterestSearch::new(
                    config.pinterest_endpoint().to_string(),
                    token.to_string(),
                )));
            }
            None => tracing::warn!("Pinterest access token not configured, skipping provider"),
        }

        Self::new(providers)
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Query all providers concurrently. Blank queries short-circuit to an
    /// empty result without touching the network; provider failures are
    /// logged and skipped, so the aggregate itself never fails.
    pub async fn search(&self, query: &str) -> Vec<ClothingItem> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        tracing::info!(
            "Searching {} providers for: {}",
            self.providers.len(),
            query
        );
        let searches = self.providers.iter().map(|provider| provider.search(query));
        let outcomes = join_all(searches).await;

        let mut results = Vec::new();
        for (provider, outcome) in self.providers.iter().zip(outcomes) {
            match outcome {
                Ok(items) => {
                    tracing::debug!("Provider '{}' returned {} items", provider.name(), items.len());
                    results.extend(items);
                }
                Err(e) => {
                    tracing::warn!("Provider '{}' failed, skipping: {}", provider.name(), e);
                }
            }
        }

        tracing::info!("Search returned {} items total", results.len());
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ItemSource, ScaleStyle};
    use crate::utils::error::{FitRoomError, Result};
    use async_trait::async_trait;

    struct StaticProvider {
        name: &'static str,
        items: Vec<ClothingItem>,
    }

    struct FailingProvider;

    fn item(id: &str) -> ClothingItem {
        ClothingItem {
            id: id.to_string(),
            name: id.to_string(),
            brand: "Brand".to_string(),
            price: 0.0,
            category: "tops".to_string(),
            image_url: format!("https://example.com/{}.jpg", id),
            thumbnail_url: None,
            description: None,
            color: None,
            size: None,
            source: ItemSource::Web,
            style: ScaleStyle::default(),
        }
    }

    #[async_trait]
    impl SearchProvider for StaticProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn search(&self, _query: &str) -> Result<Vec<ClothingItem>> {
            Ok(self.items.clone())
        }
    }

    #[async_trait]
    impl SearchProvider for FailingProvider {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn search(&self, _query: &str) -> Result<Vec<ClothingItem>> {
            Err(FitRoomError::SearchError {
                provider: "failing".to_string(),
                message: "boom".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_aggregates_all_providers() {
        let aggregator = SearchAggregator::new(vec![
            Box::new(StaticProvider {
                name: "a",
                items: vec![item("a-1"), item("a-2")],
            }),
            Box::new(StaticProvider {
                name: "b",
                items: vec![item("b-1")],
            }),
        ]);

        let results = aggregator.search("shirt").await;
        assert_eq!(results.len(), 3);
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_successful_results() {
        let aggregator = SearchAggregator::new(vec![
            Box::new(FailingProvider),
            Box::new(StaticProvider {
                name: "ok",
                items: vec![item("ok-1")],
            }),
        ]);

        let results = aggregator.search("shirt").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "ok-1");
    }

    #[tokio::test]
    async fn test_blank_query_returns_empty() {
        let aggregator = SearchAggregator::new(vec![Box::new(StaticProvider {
            name: "a",
            items: vec![item("a-1")],
        })]);

        assert!(aggregator.search("").await.is_empty());
        assert!(aggregator.search("   ").await.is_empty());
    }
}
