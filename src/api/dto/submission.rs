//! DTOs for the form submission endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::NewSubmission;

/// Form fields posted by the site.
///
/// Absent fields deserialize as empty strings so that a missing field and an
/// empty one are rejected the same way by [`Validate`].
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SubmitFormRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(custom(function = "not_blank"))]
    pub email: String,

    /// Optional; stored as an empty cell when absent.
    pub phone: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

impl From<SubmitFormRequest> for NewSubmission {
    fn from(request: SubmitFormRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone.unwrap_or_default(),
            message: request.message,
        }
    }
}

/// Successful submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFormResponse {
    pub success: bool,
    /// Range the row was written to, as reported by the spreadsheet.
    pub updated_range: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}
