//! Favorite endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::api::catalog::merged_catalog;
use crate::api::{require_session, ApiError};
use crate::catalog::Recipe;
use crate::{favorites, AppState};

/// Result of a favorite toggle
#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub recipe_id: String,
    /// Membership state after the toggle
    pub favorite: bool,
}

/// PUT /api/recipes/:id/favorite
///
/// Flip membership in the caller's favorite set and report the resulting
/// state.
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FavoriteResponse>, ApiError> {
    let session = require_session(&state).await?;
    let favorite = favorites::toggle_favorite(&state.store, &session.email, &id).await?;

    Ok(Json(FavoriteResponse {
        recipe_id: id,
        favorite,
    }))
}

/// GET /api/favorites
///
/// The caller's favorites resolved against the merged collection, in the
/// order they were favorited. Ids whose recipe is currently unavailable
/// (remote fetch failed, record deleted) are skipped for this request.
pub async fn list_favorites(
    State(state): State<AppState>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let session = require_session(&state).await?;
    let ids = favorites::favorite_ids(&state.store, &session.email).await?;

    let merged = merged_catalog(&state).await;
    let resolved: Vec<Recipe> = ids
        .iter()
        .filter_map(|id| merged.iter().find(|recipe| &recipe.id == id).cloned())
        .collect();

    Ok(Json(resolved))
}
