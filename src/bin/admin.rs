//! CLI administration tool for form-to-sheet.
//!
//! Provides commands for provisioning the responses tab, checking access to
//! the spreadsheet, and recording submissions without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Create the Responses tab and header row if missing
//! cargo run --bin admin -- sheet init
//!
//! # Check whether the tab exists
//! cargo run --bin admin -- sheet check
//!
//! # Append a submission (prompts for missing fields)
//! cargo run --bin admin -- submit --name Jo --email jo@x.com
//!
//! # Show the effective configuration
//! cargo run --bin admin -- config
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `form_to_sheet::config`.

use form_to_sheet::api::dto::submission::SubmitFormRequest;
use form_to_sheet::application::services::{SheetStatus, SubmissionService};
use form_to_sheet::config::{self, Config};
use form_to_sheet::error::AppError;
use form_to_sheet::server::build_submission_service;
use form_to_sheet::telemetry;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use validator::Validate;

/// CLI tool for managing form-to-sheet.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage the responses tab
    Sheet {
        #[command(subcommand)]
        action: SheetAction,
    },

    /// Append a submission to the responses tab
    Submit {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        phone: Option<String>,

        #[arg(short, long)]
        message: Option<String>,
    },

    /// Show the effective configuration (secrets masked)
    Config,
}

/// Responses tab subcommands.
#[derive(Subcommand)]
enum SheetAction {
    /// Create the tab and header row if missing
    Init,

    /// Report whether the tab exists
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    telemetry::init("warn", &config.log_format);

    match cli.command {
        Commands::Sheet { action } => {
            let service = build_submission_service(&config);
            handle_sheet_action(action, &service).await?
        }
        Commands::Submit {
            name,
            email,
            phone,
            message,
        } => {
            let service = build_submission_service(&config);
            let request = SubmitFormRequest {
                name: prompt_if_missing(name, "Name", false)?,
                email: prompt_if_missing(email, "Email", false)?,
                phone: Some(prompt_if_missing(phone, "Phone (optional)", true)?),
                message: prompt_if_missing(message, "Message", false)?,
            };
            submit(&service, request).await?
        }
        Commands::Config => show_config(&config),
    }

    Ok(())
}

/// Dispatches tab management commands.
async fn handle_sheet_action(action: SheetAction, service: &SubmissionService) -> Result<()> {
    match action {
        SheetAction::Init => {
            println!(
                "{} {}",
                "Ensuring sheet".bright_blue().bold(),
                service.sheet_name().cyan()
            );

            let status = service
                .ensure_sheet()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to initialize sheet: {}", e))?;

            match status {
                SheetStatus::Created => {
                    println!("{}", "✅ Sheet created with header row".green().bold())
                }
                SheetStatus::Present => println!("{}", "✅ Sheet already exists".green()),
            }
        }
        SheetAction::Check => {
            let exists = service
                .sheet_exists()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to reach spreadsheet: {}", e))?;

            if exists {
                println!("  {}: {}", service.sheet_name().cyan(), "PRESENT".green());
            } else {
                println!("  {}: {}", service.sheet_name().cyan(), "MISSING".yellow());
                println!();
                println!(
                    "  Create it with: {} admin -- sheet init",
                    "cargo run --bin".bright_cyan()
                );
            }
        }
    }

    Ok(())
}

/// Validates and records one submission.
async fn submit(service: &SubmissionService, request: SubmitFormRequest) -> Result<()> {
    if let Err(errors) = request.validate() {
        let err = AppError::from(errors);
        println!("{} {}", "❌".red(), err.message().red());
        return Err(anyhow::anyhow!(err.to_string()));
    }

    let result = service
        .submit(request.into())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to record submission: {}", e))?;

    println!("{}", "✅ Submission recorded".green().bold());
    println!("  Range: {}", result.updated_range.bright_yellow());

    Ok(())
}

/// Prints the configuration summary.
fn show_config(config: &Config) {
    println!("{}", "Configuration".bright_blue().bold());
    println!();
    println!("  {:<18} {}", "Listen address".bright_white(), config.listen_addr());
    println!(
        "  {:<18} {}",
        "Static dir".bright_white(),
        config.static_dir.display()
    );
    println!("  {:<18} {}", "Backend".bright_white(), config.backend);
    println!("  {:<18} {}", "Spreadsheet".bright_white(), config.spreadsheet_id);
    println!("  {:<18} {}", "Sheet tab".bright_white(), config.sheet_name);
    println!("  {:<18} {}", "Service account".bright_white(), config.client_email);
    println!(
        "  {:<18} {}",
        "Private key".bright_white(),
        config::mask_secret(&config.private_key)
    );
    println!("  {:<18} {}", "Sheets API".bright_white(), config.sheets_api_url);
    println!(
        "  {:<18} {}",
        "Timestamp format".bright_white(),
        config.timestamp_format
    );
}

fn prompt_if_missing(value: Option<String>, prompt: &str, optional: bool) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::new()
            .with_prompt(prompt)
            .allow_empty(optional)
            .interact_text()?),
    }
}
