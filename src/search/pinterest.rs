//! Pinterest pin search provider.

use std::collections::HashMap;

use crate::domain::categories::infer_category;
use crate::domain::model::{ClothingItem, ItemSource, ScaleStyle};
use crate::domain::ports::SearchProvider;
use crate::utils::error::{FitRoomError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

pub struct PinterestSearch {
    client: Client,
    endpoint: String,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct PinterestResponse {
    #[serde(default)]
    items: Vec<PinterestPin>,
}

#[derive(Debug, Deserialize)]
struct PinterestPin {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    image: Option<PinterestImage>,
    /// Rendition map keyed by size ("736x", "236x", ...).
    #[serde(default)]
    images: Option<HashMap<String, PinterestRendition>>,
}

#[derive(Debug, Deserialize)]
struct PinterestImage {
    original: Option<PinterestRendition>,
}

#[derive(Debug, Deserialize)]
struct PinterestRendition {
    url: String,
}

impl PinterestSearch {
    pub fn new(endpoint: String, access_token: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            access_token,
        }
    }

    fn map_pin(&self, pin: PinterestPin) -> ClothingItem {
        let title = pin.title.unwrap_or_default();
        let name = if title.is_empty() {
            "Pinterest Item".to_string()
        } else {
            title.clone()
        };

        // Prefer the original rendition, then the large one.
        let image_url = pin
            .image
            .and_then(|image| image.original.map(|r| r.url))
            .or_else(|| {
                pin.images
                    .as_ref()
                    .and_then(|images| images.get("736x").map(|r| r.url.clone()))
            })
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
        let thumbnail_url = pin
            .images
            .as_ref()
            .and_then(|images| images.get("236x").map(|r| r.url.clone()));

        ClothingItem {
            id: pin.id,
            name,
            brand: "Pinterest".to_string(),
            price: 0.0,
            category: infer_category(&title).to_string(),
            image_url,
            thumbnail_url,
            description: None,
            color: None,
            size: None,
            source: ItemSource::Pinterest,
            style: ScaleStyle::default(),
        }
    }
}

#[async_trait]
impl SearchProvider for PinterestSearch {
    fn name(&self) -> &'static str {
        "pinterest"
    }

    async fn search(&self, query: &str) -> Result<Vec<ClothingItem>> {
        tracing::debug!("Pinterest search request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", query), ("access_token", &self.access_token)])
            .send()
            .await?;

        tracing::debug!("Pinterest response status: {}", response.status());
        if !response.status().is_success() {
            return Err(FitRoomError::SearchError {
                provider: self.name().to_string(),
                message: format!("unexpected status {}", response.status()),
            });
        }

        let payload: PinterestResponse = response.json().await?;
        Ok(payload.items.into_iter().map(|pin| self.map_pin(pin)).collect())
    }
}
