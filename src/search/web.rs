//! Web image search provider (custom-search API shape).

use crate::domain::categories::infer_category;
use crate::domain::model::{ClothingItem, ItemSource, ScaleStyle};
use crate::domain::ports::SearchProvider;
use crate::utils::error::{FitRoomError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

pub struct WebImageSearch {
    client: Client,
    endpoint: String,
    api_key: String,
    engine_id: String,
    result_limit: usize,
}

#[derive(Debug, Deserialize)]
struct WebSearchResponse {
    #[serde(default)]
    items: Vec<WebSearchItem>,
}

#[derive(Debug, Deserialize)]
struct WebSearchItem {
    #[serde(default)]
    title: String,
    link: String,
    image: Option<WebSearchImage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WebSearchImage {
    thumbnail_link: Option<String>,
    context_link: Option<String>,
}

impl WebImageSearch {
    pub fn new(endpoint: String, api_key: String, engine_id: String, result_limit: usize) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            engine_id,
            result_limit,
        }
    }

    fn map_item(&self, raw: WebSearchItem) -> ClothingItem {
        let (thumbnail, context) = match raw.image {
            Some(image) => (image.thumbnail_link, image.context_link),
            None => (None, None),
        };
        // The page the image came from identifies the item; the raw image
        // link is only a fallback.
        let source_url = context.unwrap_or_else(|| raw.link.clone());

        ClothingItem {
            id: source_url.clone(),
            name: raw.title.clone(),
            brand: safe_domain(&source_url),
            price: 0.0,
            category: infer_category(&raw.title).to_string(),
            image_url: raw.link,
            thumbnail_url: thumbnail,
            description: None,
            color: None,
            size: None,
            source: ItemSource::Web,
            style: ScaleStyle::default(),
        }
    }
}

/// Hostname of a result URL, used as the displayed brand. Unparsable URLs
/// give "Unknown" rather than failing the whole result set.
fn safe_domain(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_else(|| "Unknown".to_string())
}

#[async_trait]
impl SearchProvider for WebImageSearch {
    fn name(&self) -> &'static str {
        "web"
    }

    async fn search(&self, query: &str) -> Result<Vec<ClothingItem>> {
        // Steer the image search toward clothing results.
        let search_query = format!("{} clothing fashion", query);
        let num = self.result_limit.to_string();

        tracing::debug!("Web image search request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", search_query.as_str()),
                ("searchType", "image"),
                ("imgSize", "LARGE"),
                ("imgType", "photo"),
                ("safe", "active"),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        tracing::debug!("Web search response status: {}", response.status());
        if !response.status().is_success() {
            return Err(FitRoomError::SearchError {
                provider: self.name().to_string(),
                message: format!("unexpected status {}", response.status()),
            });
        }

        let payload: WebSearchResponse = response.json().await?;
        Ok(payload
            .items
            .into_iter()
            .map(|raw| self.map_item(raw))
            .collect())
    }
}
