//! ladle-ui library - User Interface module
//!
//! HTTP surface the mobile screens consume: merged recipe catalog, recipe
//! authoring, favorites, ratings, and session management.

use axum::Router;

use crate::catalog::fetcher::CatalogClient;
use crate::config::RuntimeSettings;
use ladle_common::db::RecordStore;

pub mod api;
pub mod catalog;
pub mod config;
pub mod favorites;
pub mod library;
pub mod ratings;
pub mod session;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Key-value record store (and the pool behind it)
    pub store: RecordStore,
    /// Remote catalog client
    pub catalog: CatalogClient,
    /// Runtime settings loaded at startup
    pub settings: RuntimeSettings,
}

impl AppState {
    /// Create new application state
    pub fn new(store: RecordStore, catalog: CatalogClient, settings: RuntimeSettings) -> Self {
        Self {
            store,
            catalog,
            settings,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{delete, get, post, put};

    Router::new()
        .route("/api/users", post(api::auth::sign_up))
        .route(
            "/api/session",
            post(api::auth::sign_in)
                .get(api::auth::current_session)
                .delete(api::auth::sign_out),
        )
        .route(
            "/api/recipes",
            get(api::catalog::get_catalog).post(api::library::add_recipe),
        )
        .route("/api/recipes/mine", get(api::library::my_recipes))
        .route("/api/recipes/:id", delete(api::library::delete_recipe))
        .route(
            "/api/recipes/:id/favorite",
            put(api::favorites::toggle_favorite),
        )
        .route(
            "/api/recipes/:id/rating",
            put(api::ratings::set_rating).get(api::ratings::get_rating),
        )
        .route("/api/favorites", get(api::favorites::list_favorites))
        .merge(api::health_routes())
        .with_state(state)
}
