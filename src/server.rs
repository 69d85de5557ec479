//! HTTP server initialization and runtime setup.
//!
//! Builds the spreadsheet backend, provisions the responses tab, and runs the
//! Axum server until Ctrl+C.

use crate::application::services::SubmissionService;
use crate::config::{Config, SheetsBackend};
use crate::domain::repositories::SheetRepository;
use crate::infrastructure::sheets::{
    GoogleSheetsRepository, InMemorySheetRepository, SheetsCredentials,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Creates the spreadsheet backend selected by `SHEETS_BACKEND`.
pub fn build_sheet_repository(config: &Config) -> Arc<dyn SheetRepository> {
    match config.backend {
        SheetsBackend::Google => {
            let credentials = SheetsCredentials::service_account(
                config.client_email.clone(),
                config.private_key.clone(),
                config.token_uri.clone(),
            );
            tracing::info!("Using Google Sheets backend");
            Arc::new(GoogleSheetsRepository::new(
                config.sheets_api_url.clone(),
                config.spreadsheet_id.clone(),
                credentials,
            ))
        }
        SheetsBackend::Memory => {
            tracing::warn!("Using in-memory spreadsheet; submissions are lost on restart");
            Arc::new(InMemorySheetRepository::new())
        }
    }
}

/// Creates the submission service for `config`.
pub fn build_submission_service(config: &Config) -> SubmissionService {
    SubmissionService::new(
        build_sheet_repository(config),
        config.sheet_name.clone(),
        config.timestamp_format.clone(),
    )
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Spreadsheet backend
/// - Responses tab and header row (failures are logged and ignored)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let submission_service = Arc::new(build_submission_service(&config));

    submission_service.initialize().await;

    let state = AppState::new(submission_service);
    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
