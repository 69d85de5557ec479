//! Shared helpers.
//!
//! - [`a1_notation`] - A1 range formatting and parsing

pub mod a1_notation;
