//! Core domain entities.
//!
//! - [`NewSubmission`] - Validated form fields
//! - [`Submission`] - A submission with its timestamp, ready to become a row

pub mod submission;

pub use submission::{NewSubmission, SHEET_HEADER, Submission, header_row};
