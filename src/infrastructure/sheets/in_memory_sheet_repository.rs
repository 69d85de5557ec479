//! In-memory spreadsheet for tests and local development.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::repositories::{AppendResult, SheetError, SheetRepository};
use crate::utils::a1_notation::{column_letters, range as a1_range, split_range};

/// A spreadsheet held in process memory.
///
/// Mirrors the error behaviour of the Sheets API closely enough for the
/// submission flow: missing tabs are [`SheetError::NotFound`], duplicate tab
/// titles are [`SheetError::AlreadyExists`]. A failure can be injected with
/// [`Self::fail_with`] to simulate an unreachable service.
#[derive(Default)]
pub struct InMemorySheetRepository {
    tabs: RwLock<BTreeMap<String, Vec<Vec<String>>>>,
    failure: RwLock<Option<SheetError>>,
}

impl InMemorySheetRepository {
    pub fn new() -> Self {
        debug!("Using in-memory spreadsheet");
        Self::default()
    }

    /// Adds a tab holding `rows`, replacing any tab with the same name.
    pub async fn insert_tab(&self, name: &str, rows: Vec<Vec<String>>) {
        self.tabs.write().await.insert(name.to_string(), rows);
    }

    /// Rows of a tab, or `None` if it does not exist.
    pub async fn rows(&self, name: &str) -> Option<Vec<Vec<String>>> {
        self.tabs.read().await.get(name).cloned()
    }

    pub async fn tab_names(&self) -> Vec<String> {
        self.tabs.read().await.keys().cloned().collect()
    }

    /// Makes every following call fail with `error`.
    pub async fn fail_with(&self, error: SheetError) {
        *self.failure.write().await = Some(error);
    }

    pub async fn clear_failure(&self) {
        *self.failure.write().await = None;
    }

    async fn check_failure(&self) -> Result<(), SheetError> {
        match self.failure.read().await.as_ref() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

fn tab_name(range: &str) -> Result<(String, &str), SheetError> {
    match split_range(range) {
        (Some(tab), cells) => Ok((tab, cells)),
        (None, _) => Err(SheetError::NotFound(format!(
            "Unable to parse range: {}",
            range
        ))),
    }
}

fn not_found(range: &str) -> SheetError {
    SheetError::NotFound(format!("Unable to parse range: {}", range))
}

#[async_trait]
impl SheetRepository for InMemorySheetRepository {
    async fn probe(&self, range: &str) -> Result<(), SheetError> {
        self.check_failure().await?;
        let (tab, _) = tab_name(range)?;

        if self.tabs.read().await.contains_key(&tab) {
            Ok(())
        } else {
            Err(not_found(range))
        }
    }

    async fn create_tab(&self, title: &str, header: Vec<String>) -> Result<(), SheetError> {
        self.check_failure().await?;
        let mut tabs = self.tabs.write().await;

        if tabs.contains_key(title) {
            return Err(SheetError::AlreadyExists(format!(
                "A sheet with the name \"{}\" already exists. Please enter another name.",
                title
            )));
        }

        tabs.insert(title.to_string(), vec![header]);
        Ok(())
    }

    async fn append_rows(
        &self,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<AppendResult, SheetError> {
        self.check_failure().await?;
        let (tab, _) = tab_name(range)?;
        let mut tabs = self.tabs.write().await;
        let data = tabs.get_mut(&tab).ok_or_else(|| not_found(range))?;

        let width = rows.iter().map(Vec::len).max().unwrap_or(0).max(1) as u32;
        let first = data.len() + 1;
        let updated_rows = rows.len() as u32;
        data.extend(rows);
        let last = data.len().max(first);

        let updated_range = a1_range(
            &tab,
            &format!("A{}:{}{}", first, column_letters(width), last),
        );

        Ok(AppendResult {
            updated_range,
            updated_rows,
        })
    }
}
