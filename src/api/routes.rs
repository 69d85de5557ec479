//! API route configuration.

use crate::api::handlers::{health_handler, submit_form_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON endpoints.
///
/// # Endpoints
///
/// - `POST /submit-form` - Append a form submission to the spreadsheet
/// - `GET  /health`      - Liveness check
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/submit-form", post(submit_form_handler))
        .route("/health", get(health_handler))
}
