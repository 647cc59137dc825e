//! HTTP front-end: the two-tab browser page plus a small JSON API.

pub mod error;
pub mod handlers;
pub mod page;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::orchestrator::MovieBrowser;

pub use error::{WebError, WebResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub browser: MovieBrowser,
}

impl AppState {
    pub fn new(browser: MovieBrowser) -> Self {
        Self { browser }
    }
}

/// Creates the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/api/recommend", get(handlers::recommend))
        .route("/api/browse", get(handlers::browse))
        .route("/api/titles", get(handlers::titles))
        .route("/api/genres", get(handlers::genres))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
