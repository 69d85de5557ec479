//! Spreadsheet backends.
//!
//! Provides two [`crate::domain::repositories::SheetRepository`] implementations:
//! - [`GoogleSheetsRepository`] - Production backend over the Sheets API
//! - [`InMemorySheetRepository`] - Process-local tabs for tests and local development
//!
//! The Google backend is authorized by [`SheetsCredentials`].

mod auth;
mod google_sheets_repository;
mod in_memory_sheet_repository;

pub use google_sheets_repository::GoogleSheetsRepository;
pub use in_memory_sheet_repository::InMemorySheetRepository;
pub use auth::SheetsCredentials;
