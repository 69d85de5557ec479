//! Repository trait definitions for the domain layer.
//!
//! - Traits define the contract for spreadsheet access
//! - Implementations live in `crate::infrastructure::sheets`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod sheet_repository;

pub use sheet_repository::{AppendResult, SheetError, SheetRepository};

#[cfg(test)]
pub use sheet_repository::MockSheetRepository;
