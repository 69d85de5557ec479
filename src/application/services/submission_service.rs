//! Submission recording service.

use std::sync::Arc;

use chrono::Local;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewSubmission, Submission, header_row};
use crate::domain::repositories::{AppendResult, SheetError, SheetRepository};
use crate::utils::a1_notation;

/// Cell read to decide whether the tab exists.
const PROBE_CELLS: &str = "A1";
/// Columns submissions are appended to.
const DATA_CELLS: &str = "A:E";

/// Result of [`SubmissionService::ensure_sheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetStatus {
    /// The tab was already there (or another request created it first).
    Present,
    /// The tab was created and the header written.
    Created,
}

/// Appends form submissions to one tab of a spreadsheet.
///
/// Holds no state besides its configuration; concurrent calls are not
/// coordinated with each other.
pub struct SubmissionService {
    sheets: Arc<dyn SheetRepository>,
    sheet_name: String,
    timestamp_format: String,
}

impl SubmissionService {
    /// Creates a new submission service.
    ///
    /// `timestamp_format` is a chrono format string and must already be
    /// validated (see [`crate::config::Config::validate`]).
    pub fn new(
        sheets: Arc<dyn SheetRepository>,
        sheet_name: impl Into<String>,
        timestamp_format: impl Into<String>,
    ) -> Self {
        Self {
            sheets,
            sheet_name: sheet_name.into(),
            timestamp_format: timestamp_format.into(),
        }
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// Checks whether the tab exists without changing anything.
    ///
    /// # Errors
    ///
    /// Returns any probe failure other than [`SheetError::NotFound`].
    pub async fn sheet_exists(&self) -> Result<bool, SheetError> {
        match self.sheets.probe(&self.range(PROBE_CELLS)).await {
            Ok(()) => Ok(true),
            Err(SheetError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Makes sure the tab exists with the header in row 1.
    ///
    /// Only a [`SheetError::NotFound`] probe leads to creation. The tab is
    /// created together with its header, so concurrent submissions never see
    /// it empty. Losing a creation race to a concurrent caller counts as
    /// [`SheetStatus::Present`].
    ///
    /// # Errors
    ///
    /// Returns the first downstream failure; nothing is retried.
    pub async fn ensure_sheet(&self) -> Result<SheetStatus, SheetError> {
        if self.sheet_exists().await? {
            return Ok(SheetStatus::Present);
        }

        info!(sheet = %self.sheet_name, "Sheet not found, creating it");

        match self.sheets.create_tab(&self.sheet_name, header_row()).await {
            Ok(()) => {
                info!(sheet = %self.sheet_name, "Sheet created with header row");
                Ok(SheetStatus::Created)
            }
            Err(SheetError::AlreadyExists(message)) => {
                debug!(sheet = %self.sheet_name, "Sheet created concurrently: {}", message);
                Ok(SheetStatus::Present)
            }
            Err(e) => Err(e),
        }
    }

    /// Startup variant of [`Self::ensure_sheet`]: failures are logged, not returned.
    pub async fn initialize(&self) {
        match self.ensure_sheet().await {
            Ok(SheetStatus::Present) => info!(sheet = %self.sheet_name, "Sheet ready"),
            Ok(SheetStatus::Created) => {}
            Err(e) => warn!(
                sheet = %self.sheet_name,
                "Sheet initialization failed, continuing: {}", e
            ),
        }
    }

    /// Records one submission as a new row.
    ///
    /// The tab is re-checked first, then exactly one row is appended with a
    /// server-generated timestamp. Identical submissions produce identical
    /// (but separate) rows.
    ///
    /// # Errors
    ///
    /// Returns the downstream failure from either step.
    pub async fn submit(&self, submission: NewSubmission) -> Result<AppendResult, SheetError> {
        self.ensure_sheet().await?;

        let record = Submission::new(submission, self.timestamp());
        let result = self
            .sheets
            .append_rows(&self.range(DATA_CELLS), vec![record.into_row()])
            .await?;

        debug!(range = %result.updated_range, "Submission appended");
        Ok(result)
    }

    fn range(&self, cells: &str) -> String {
        a1_notation::range(&self.sheet_name, cells)
    }

    fn timestamp(&self) -> String {
        Local::now().format(&self.timestamp_format).to_string()
    }
}
