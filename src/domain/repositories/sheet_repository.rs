//! Repository trait for the backing spreadsheet.

use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by a [`SheetRepository`].
///
/// Each variant carries the downstream message unchanged so it can be
/// surfaced to API callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SheetError {
    /// The tab or range does not exist.
    #[error("Sheet not found: {0}")]
    NotFound(String),

    /// A tab with the requested title already exists.
    #[error("Sheet already exists: {0}")]
    AlreadyExists(String),

    /// No access token could be obtained.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The API answered with a non-success status.
    #[error("Sheets API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never got a response.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl SheetError {
    /// The raw message reported by the downstream service.
    pub fn downstream_message(&self) -> &str {
        match self {
            SheetError::NotFound(message)
            | SheetError::AlreadyExists(message)
            | SheetError::Auth(message)
            | SheetError::Transport(message)
            | SheetError::Api { message, .. } => message,
        }
    }
}

/// Outcome of an append call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendResult {
    /// Range the new rows landed in, e.g. `Responses!A5:E5`.
    pub updated_range: String,
    pub updated_rows: u32,
}

/// Access to a single spreadsheet document.
///
/// Ranges are A1 notation including the tab name (see
/// [`crate::utils::a1_notation::range`]).
///
/// # Implementations
///
/// - [`crate::infrastructure::sheets::GoogleSheetsRepository`] - Sheets API v4
/// - [`crate::infrastructure::sheets::InMemorySheetRepository`] - process-local tabs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SheetRepository: Send + Sync {
    /// Reads `range` and discards the values.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::NotFound`] if the tab does not exist; any other
    /// variant for auth, quota or network failures.
    async fn probe(&self, range: &str) -> Result<(), SheetError>;

    /// Adds a new tab named `title` with `header` as its first row.
    ///
    /// The tab and its header appear together or not at all, so no caller
    /// can observe the tab without its header.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::AlreadyExists`] if the title is taken.
    async fn create_tab(&self, title: &str, header: Vec<String>) -> Result<(), SheetError>;

    /// Appends `rows` after the last row of data in `range`.
    async fn append_rows(
        &self,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<AppendResult, SheetError>;
}
