//! DTOs for health check endpoint.

use serde::Serialize;

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Current server time, RFC 3339 UTC.
    pub timestamp: String,
    pub version: String,
}
