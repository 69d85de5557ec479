//! Domain layer containing the submission model and the spreadsheet contract.
//!
//! - [`entities`] - Submission records and the sheet header
//! - [`repositories`] - [`repositories::SheetRepository`] and its error type
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod repositories;
