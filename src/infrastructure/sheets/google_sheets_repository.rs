//! Google Sheets API v4 backend over the `google-sheets4` hub.

use async_trait::async_trait;
use google_sheets4::api::{BatchUpdateSpreadsheetRequest, Scope, ValueRange};
use google_sheets4::hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use google_sheets4::hyper_util::client::legacy::Client;
use google_sheets4::hyper_util::client::legacy::connect::HttpConnector;
use google_sheets4::hyper_util::rt::TokioExecutor;
use google_sheets4::{Error as HubError, Sheets};
use serde_json::{Value, json};
use tokio::sync::OnceCell;
use tracing::debug;

use super::auth::{SheetsCredentials, service_account_authenticator};
use crate::domain::repositories::{AppendResult, SheetError, SheetRepository};

/// Input option applied to every write; values are parsed as if typed into the UI.
const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

type SheetsHub = Sheets<HttpsConnector<HttpConnector>>;

/// [`SheetRepository`] over the Sheets API.
///
/// One instance addresses one spreadsheet document. The hub (HTTP client and
/// authenticator) is built on first use, so malformed credentials show up as
/// per-request [`SheetError::Auth`] failures rather than a startup crash.
pub struct GoogleSheetsRepository {
    base_url: String,
    spreadsheet_id: String,
    credentials: SheetsCredentials,
    hub: OnceCell<SheetsHub>,
}

impl GoogleSheetsRepository {
    /// Creates a repository for `spreadsheet_id`.
    ///
    /// `base_url` is the API root, normally `https://sheets.googleapis.com/`.
    pub fn new(
        base_url: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        credentials: SheetsCredentials,
    ) -> Self {
        Self {
            base_url: format!("{}/", base_url.into().trim_end_matches('/')),
            spreadsheet_id: spreadsheet_id.into(),
            credentials,
            hub: OnceCell::new(),
        }
    }

    async fn hub(&self) -> Result<&SheetsHub, SheetError> {
        self.hub
            .get_or_try_init(|| async {
                let connector = HttpsConnectorBuilder::new()
                    .with_native_roots()
                    .map_err(|e| SheetError::Transport(e.to_string()))?
                    .https_or_http()
                    .enable_http1()
                    .enable_http2()
                    .build();
                let client = Client::builder(TokioExecutor::new()).build(connector);

                let mut hub = match &self.credentials {
                    SheetsCredentials::ServiceAccount {
                        client_email,
                        private_key,
                        token_uri,
                    } => Sheets::new(
                        client,
                        service_account_authenticator(client_email, private_key, token_uri)
                            .await?,
                    ),
                    SheetsCredentials::AccessToken(token) => Sheets::new(client, token.clone()),
                };
                hub.base_url(self.base_url.clone());

                debug!(base_url = %self.base_url, "Sheets hub ready");
                Ok(hub)
            })
            .await
    }
}

/// Sheet id requested for a new tab.
///
/// Derived from the title, so concurrent creators of the same tab ask for the
/// same id and the loser gets an "already exists" answer.
fn tab_id(title: &str) -> i32 {
    let hash = title.bytes().fold(0x811c_9dc5_u32, |h, b| {
        (h ^ u32::from(b)).wrapping_mul(0x0100_0193)
    });
    (hash & 0x7fff_ffff).max(1) as i32
}

/// `addSheet` followed by an `updateCells` writing `header` into row 1, so
/// both land in one atomic batch.
fn add_tab_request(title: &str, header: Vec<String>) -> Result<BatchUpdateSpreadsheetRequest, SheetError> {
    let sheet_id = tab_id(title);
    let cells: Vec<Value> = header
        .into_iter()
        .map(|h| json!({ "userEnteredValue": { "stringValue": h } }))
        .collect();

    let body = json!({
        "requests": [
            { "addSheet": { "properties": { "sheetId": sheet_id, "title": title } } },
            {
                "updateCells": {
                    "start": { "sheetId": sheet_id, "rowIndex": 0, "columnIndex": 0 },
                    "rows": [{ "values": cells }],
                    "fields": "userEnteredValue"
                }
            }
        ]
    });

    serde_json::from_str(&body.to_string()).map_err(|e| SheetError::Transport(e.to_string()))
}

fn value_range(rows: Vec<Vec<String>>) -> ValueRange {
    ValueRange {
        major_dimension: Some("ROWS".to_string()),
        range: None,
        values: Some(
            rows.into_iter()
                .map(|row| row.into_iter().map(Value::String).collect())
                .collect(),
        ),
    }
}

/// Maps an error response to a [`SheetError`], keeping Google's message.
///
/// Reading a range on a missing tab answers `400 Unable to parse range`, and
/// adding a tab with a taken title answers `400 ... already exists`.
fn classify_error(status: u16, message: String) -> SheetError {
    match status {
        404 => SheetError::NotFound(message),
        400 if message.contains("Unable to parse range") => SheetError::NotFound(message),
        400 if message.contains("already exists") => SheetError::AlreadyExists(message),
        _ => SheetError::Api { status, message },
    }
}

fn sheet_error(err: HubError) -> SheetError {
    let mapped = match err {
        HubError::BadRequest(body) => {
            let status = body["error"]["code"]
                .as_u64()
                .and_then(|code| u16::try_from(code).ok())
                .unwrap_or(400);
            let message = body["error"]["message"]
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| body.to_string());
            classify_error(status, message)
        }
        HubError::Failure(response) => {
            let status = response.status();
            classify_error(status.as_u16(), status.to_string())
        }
        HubError::MissingToken(e) => SheetError::Auth(e.to_string()),
        HubError::HttpError(e) => SheetError::Transport(e.to_string()),
        other => SheetError::Transport(other.to_string()),
    };

    debug!("Sheets API request failed: {}", mapped);
    mapped
}

#[async_trait]
impl SheetRepository for GoogleSheetsRepository {
    async fn probe(&self, range: &str) -> Result<(), SheetError> {
        self.hub()
            .await?
            .spreadsheets()
            .values_get(&self.spreadsheet_id, range)
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await
            .map_err(sheet_error)?;
        Ok(())
    }

    async fn create_tab(&self, title: &str, header: Vec<String>) -> Result<(), SheetError> {
        let request = add_tab_request(title, header)?;

        self.hub()
            .await?
            .spreadsheets()
            .batch_update(request, &self.spreadsheet_id)
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await
            .map_err(sheet_error)?;
        Ok(())
    }

    async fn append_rows(
        &self,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<AppendResult, SheetError> {
        let row_count = rows.len() as u32;

        let (_, response) = self
            .hub()
            .await?
            .spreadsheets()
            .values_append(value_range(rows), &self.spreadsheet_id, range)
            .value_input_option(VALUE_INPUT_OPTION)
            .insert_data_option("INSERT_ROWS")
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await
            .map_err(sheet_error)?;

        let updates = response.updates;
        let updated_range = updates
            .as_ref()
            .and_then(|u| u.updated_range.clone())
            .or(response.table_range)
            .unwrap_or_else(|| range.to_string());
        let updated_rows = updates
            .and_then(|u| u.updated_rows)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(row_count);

        Ok(AppendResult {
            updated_range,
            updated_rows,
        })
    }
}
