#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use form_to_sheet::application::services::SubmissionService;
use form_to_sheet::infrastructure::sheets::InMemorySheetRepository;
use form_to_sheet::routes::app_router;
use form_to_sheet::state::AppState;
use tempfile::TempDir;

pub const SHEET: &str = "Responses";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn header() -> Vec<String> {
    ["Timestamp", "Name", "Email", "Phone", "Message"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn create_test_state() -> (AppState, Arc<InMemorySheetRepository>) {
    let sheets = Arc::new(InMemorySheetRepository::new());
    let service = SubmissionService::new(sheets.clone(), SHEET, TIMESTAMP_FORMAT);

    (AppState::new(Arc::new(service)), sheets)
}

/// Writes a minimal site into a temporary directory.
pub fn create_static_site() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("index.html"),
        "<!DOCTYPE html><title>Contact</title>",
    )
    .unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('form');").unwrap();
    dir
}

pub fn create_test_app(static_dir: &Path) -> (Router, Arc<InMemorySheetRepository>) {
    let (state, sheets) = create_test_state();
    (app_router(state, static_dir), sheets)
}

/// Full application over an in-memory spreadsheet. Keep the `TempDir` alive
/// for as long as the server is used.
pub fn create_test_server() -> (TestServer, Arc<InMemorySheetRepository>, TempDir) {
    let site = create_static_site();
    let (app, sheets) = create_test_app(site.path());
    (TestServer::new(app).unwrap(), sheets, site)
}
