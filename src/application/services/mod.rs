//! Business logic services for the application layer.

pub mod submission_service;

pub use submission_service::{SheetStatus, SubmissionService};
