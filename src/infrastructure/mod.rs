//! Infrastructure layer for external integrations.
//!
//! This layer implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`sheets`] - Spreadsheet backends (Google Sheets and in-memory)

pub mod sheets;
