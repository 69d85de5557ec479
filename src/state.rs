use std::sync::Arc;

use crate::application::services::SubmissionService;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub submission_service: Arc<SubmissionService>,
}

impl AppState {
    pub fn new(submission_service: Arc<SubmissionService>) -> Self {
        Self { submission_service }
    }
}
