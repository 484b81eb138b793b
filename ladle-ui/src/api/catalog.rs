//! Merged catalog endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::ApiError;
use crate::catalog::{reconcile, Recipe};
use crate::{library, AppState};

/// Query parameters for catalog viewing
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Selected category; omitted means no filtering
    pub category: Option<String>,
}

/// Catalog response
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub categories: Vec<String>,
    pub recipes: Vec<Recipe>,
}

/// GET /api/recipes?category=
///
/// The merged display collection with its category list, optionally
/// filtered. Both source batches degrade independently: an unreachable
/// catalog endpoint or an unreadable local record leaves that portion empty
/// for this request instead of failing it.
pub async fn get_catalog(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<CatalogResponse>, ApiError> {
    let merged = merged_catalog(&state).await;
    let categories = reconcile::categories(&merged);

    let recipes = match &query.category {
        Some(category) => reconcile::filter_by_category(merged, category),
        None => merged,
    };

    Ok(Json(CatalogResponse { categories, recipes }))
}

/// Build the merged display collection for one request
///
/// Fire-once fetch, no retry: a failure is logged and the remote batch is
/// empty for this pass.
pub(crate) async fn merged_catalog(state: &AppState) -> Vec<Recipe> {
    let remote = match state.catalog.fetch().await {
        Ok(items) => items.into_iter().map(Recipe::from_remote).collect(),
        Err(e) => {
            warn!("Remote catalog unavailable: {}", e);
            Vec::new()
        }
    };

    let local = match library::custom_recipes(&state.store).await {
        Ok(records) => records.into_iter().map(Recipe::from_stored).collect(),
        Err(e) => {
            warn!("Local recipe records unavailable: {}", e);
            Vec::new()
        }
    };

    reconcile::merge(local, remote)
}
