//! tunebase-api library
//!
//! Artist, album and song resources over a SQLite store. Exposed as a
//! library so integration tests can drive the router directly.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, opened once at startup
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/artist", get(api::get_artist).post(api::create_artist))
        .route("/album", get(api::get_albums).post(api::create_album))
        .route("/song", get(api::get_songs).post(api::create_song))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
