//! Rating endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::{require_session, ApiError};
use crate::{ratings, AppState};

/// Rating submission body
#[derive(Debug, Deserialize)]
pub struct RatingRequest {
    pub value: i64,
}

/// Stored rating for one recipe
#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub recipe_id: String,
    pub value: Option<u8>,
}

/// PUT /api/recipes/:id/rating
///
/// Record the caller's rating; out-of-range values are rejected without
/// mutating stored state.
pub async fn set_rating(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RatingRequest>,
) -> Result<StatusCode, ApiError> {
    let session = require_session(&state).await?;
    ratings::rate(&state.store, &session.email, &id, request.value).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/recipes/:id/rating
pub async fn get_rating(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RatingResponse>, ApiError> {
    let session = require_session(&state).await?;
    let value = ratings::rating_of(&state.store, &session.email, &id).await?;

    Ok(Json(RatingResponse {
        recipe_id: id,
        value,
    }))
}
