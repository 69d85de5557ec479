//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::submission_service::SubmissionService`] - Sheet provisioning and row appends

pub mod services;
