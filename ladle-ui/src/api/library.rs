//! Authored recipe endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::{require_session, ApiError};
use crate::catalog::Recipe;
use crate::library::{self, NewRecipe};
use crate::AppState;

/// POST /api/recipes
///
/// Author a new recipe owned by the current session.
pub async fn add_recipe(
    State(state): State<AppState>,
    Json(input): Json<NewRecipe>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    let session = require_session(&state).await?;
    let stored = library::add_recipe(
        &state.store,
        &session,
        input,
        &state.settings.default_recipe_image,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(Recipe::from_stored(stored))))
}

/// GET /api/recipes/mine
///
/// The caller's own records, newest last.
pub async fn my_recipes(State(state): State<AppState>) -> Result<Json<Vec<Recipe>>, ApiError> {
    let session = require_session(&state).await?;
    let recipes = library::user_recipes(&state.store, &session).await?;

    Ok(Json(recipes.into_iter().map(Recipe::from_stored).collect()))
}

/// DELETE /api/recipes/:id
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let session = require_session(&state).await?;
    library::delete_recipe(&state.store, &session, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
