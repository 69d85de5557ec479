//! Handler for the form submission endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::submission::{SubmitFormRequest, SubmitFormResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Appends one form submission to the responses tab.
///
/// # Endpoint
///
/// `POST /submit-form`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Jo",
///   "email": "jo@x.com",
///   "phone": "555-0100",   // optional
///   "message": "hi"
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "success": true, "updatedRange": "Responses!A2:E2" }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: body is not JSON, or `name`, `email` or `message` is missing or empty
/// - **500 Internal Server Error**: the spreadsheet call failed; `error` carries its message
pub async fn submit_form_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubmitFormRequest>, JsonRejection>,
) -> Result<Json<SubmitFormResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(rejection.body_text(), None)
    })?;
    payload.validate()?;

    let result = state
        .submission_service
        .submit(payload.into())
        .await
        .map_err(|e| {
            tracing::error!("Failed to record submission: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(SubmitFormResponse {
        success: true,
        updated_range: result.updated_range,
    }))
}
