//! Handler for health check endpoint.

use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::api::dto::health::HealthResponse;

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /health`
///
/// The spreadsheet is not contacted, so this only reflects liveness.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2026-10-17T12:00:00.000Z",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
