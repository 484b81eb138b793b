//! Remote recipe catalog client
//!
//! One-shot fetch of the hosted recipe listing. There is no retry and no
//! cancellation: a request runs to completion or failure, and a failure
//! leaves the remote portion of the merged view empty for that pass.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("ladle/", env!("CARGO_PKG_VERSION"));

/// Catalog client errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Catalog endpoint returned a non-success status
    #[error("Catalog API error {0}: {1}")]
    Api(u16, String),

    /// Failed to parse the listing JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Top-level catalog listing response
///
/// The endpoint returns more fields (paging counters); only the recipe
/// array matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteCatalog {
    pub recipes: Vec<RemoteRecipe>,
}

/// One recipe element of the remote listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteRecipe {
    pub id: Option<i64>,
    pub name: Option<String>,
    /// Category-like tags ("lunch", "dinner", ...)
    #[serde(rename = "mealType")]
    pub meal_type: Option<Vec<String>>,
    pub image: Option<String>,
    pub instructions: Option<Vec<String>>,
}

/// Remote catalog API client
#[derive(Clone)]
pub struct CatalogClient {
    http_client: reqwest::Client,
    url: String,
}

impl CatalogClient {
    /// Create a new catalog client for the configured listing endpoint
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            url: url.into(),
        })
    }

    /// Fetch the recipe listing
    pub async fn fetch(&self) -> Result<Vec<RemoteRecipe>, CatalogError> {
        tracing::debug!(url = %self.url, "Fetching remote recipe catalog");

        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api(status.as_u16(), error_text));
        }

        let catalog: RemoteCatalog = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        tracing::info!(count = catalog.recipes.len(), "Remote catalog fetch successful");

        Ok(catalog.recipes)
    }
}
