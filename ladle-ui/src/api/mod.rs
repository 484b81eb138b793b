//! HTTP API handlers for ladle-ui

pub mod auth;
pub mod catalog;
pub mod favorites;
pub mod health;
pub mod library;
pub mod ratings;

pub use health::health_routes;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::AppState;
use ladle_common::db::models::SessionUser;
use ladle_common::Error;

/// Error type for API responses
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Internal(String),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            Error::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Resolve the current session or reject the request with 401
pub async fn require_session(state: &AppState) -> Result<SessionUser, ApiError> {
    crate::session::current_user(&state.store)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("sign in required".to_string()))
}
