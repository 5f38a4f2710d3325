//! Product catalogue client (fakestoreapi.com-compatible).

use serde::{Deserialize, Serialize};
use tracing::instrument;

pub const STORE_API_BASE: &str = "https://fakestoreapi.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    pub rating: Option<Rating>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    #[error("Product not found: {0}")]
    NotFound(u32),

    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.without_url())
    }
}

pub struct ProductClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: &str) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one product.
    ///
    /// The catalogue answers unknown ids with `200` and an empty body, which
    /// is reported as `NotFound` just like a `404`.
    #[instrument(skip(self), level = "info")]
    pub async fn get_product(&self, id: u32) -> Result<Product, StoreError> {
        let url = format!("{}/products/{}", self.base_url, id);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status.as_u16() == 404 {
            return Err(StoreError::NotFound(id));
        }
        if !status.is_success() {
            tracing::warn!("Product request failed with status {}", status);
            return Err(StoreError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        if body.trim().is_empty() || body.trim() == "null" {
            return Err(StoreError::NotFound(id));
        }

        let product: Product =
            serde_json::from_str(&body).map_err(|e| StoreError::Parse(e.to_string()))?;
        tracing::debug!("Loaded product {}: {}", product.id, product.title);
        Ok(product)
    }
}
