//! Top-level router configuration combining the API and the static site.
//!
//! # Route Structure
//!
//! - `POST /submit-form` - Append a submission to the spreadsheet
//! - `GET  /health`      - Liveness check
//! - `GET  /*`           - Static assets, falling back to `index.html`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use std::path::Path;

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory holding the site; any path that does not name a
///   file in it is answered with its `index.html`, so client-side routes load
pub fn app_router(state: AppState, static_dir: &Path) -> Router {
    let index = ServeFile::new(static_dir.join("index.html"));
    let site = ServeDir::new(static_dir).fallback(index);

    Router::new()
        .merge(api::routes::api_routes())
        .fallback_service(site)
        .with_state(state)
        .layer(tracing::layer())
}
