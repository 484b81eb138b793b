//! Sign-up, sign-in and session endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::api::ApiError;
use crate::{session, AppState};
use ladle_common::db::models::SessionUser;

/// Credentials for sign-up and sign-in
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/users
///
/// Register a new account; the new identity is signed in on success.
pub async fn sign_up(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<SessionUser>), ApiError> {
    let user = session::sign_up(&state.store, &request.email, &request.password).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/session
///
/// Sign in with existing credentials.
pub async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<SessionUser>, ApiError> {
    match session::sign_in(&state.store, &request.email, &request.password).await? {
        Some(user) => Ok(Json(user)),
        None => Err(ApiError::Unauthorized(
            "invalid email or password".to_string(),
        )),
    }
}

/// DELETE /api/session
pub async fn sign_out(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    session::sign_out(&state.store).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/session
///
/// The currently signed-in identity; 401 when signed out.
pub async fn current_session(
    State(state): State<AppState>,
) -> Result<Json<SessionUser>, ApiError> {
    match session::current_user(&state.store).await? {
        Some(user) => Ok(Json(user)),
        None => Err(ApiError::Unauthorized("not signed in".to_string())),
    }
}
