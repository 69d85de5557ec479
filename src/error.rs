//! HTTP-facing error type.
//!
//! Every failure a handler can produce is collapsed into [`AppError`] and rendered
//! as `{ "success": false, "error": "...", "details": {...} }`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::repositories::SheetError;

/// Failure body returned by the API.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug)]
pub enum AppError {
    /// Client error: the request is missing something required.
    Validation {
        message: String,
        details: Option<Value>,
    },
    /// Downstream or server error. The message is passed through verbatim.
    Internal {
        message: String,
        details: Option<Value>,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Option<Value>) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Option<Value>) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. } | AppError::Internal { message, .. } => message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, details) = match self {
            AppError::Validation { message, details } | AppError::Internal { message, details } => {
                (message, details)
            }
        };

        let body = ErrorBody {
            success: false,
            error: message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<SheetError> for AppError {
    fn from(e: SheetError) -> Self {
        let details = match &e {
            SheetError::Api { status, .. } => Some(json!({ "status": status })),
            _ => None,
        };
        AppError::internal(e.downstream_message(), details)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();
        fields.sort_unstable();

        AppError::bad_request(
            format!("Missing required fields: {}", fields.join(", ")),
            Some(json!({ "fields": fields })),
        )
    }
}
