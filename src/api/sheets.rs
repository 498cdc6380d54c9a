//! Spreadsheet data-source client.
//!
//! Fetches task rows from a spreadsheet published through the visualization
//! query endpoint and, optionally, resolves a viewer's display name through a
//! directory web app.
//!
//! ## Response formats
//!
//! The visualization endpoint answers with a JSONP-style wrapper around a
//! JSON document:
//!
//! ```text
//! /*O_o*/
//! google.visualization.Query.setResponse({"status":"ok","table":{"rows":[{"c":[{"v":"T1"},null]}]}});
//! ```
//!
//! Everything between the first `{` and the last `}` is the document; cells
//! are `table.rows[].c[].v`. Endpoints that already return a plain JSON array
//! of row arrays are accepted as well.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sheetdash::api::sheets::{Sheets, SheetsConfig};
//! use sheetdash::api::RowSource;
//! use sheetdash::libs::mode::Mode;
//!
//! # async fn run(config: SheetsConfig) -> anyhow::Result<()> {
//! let client = Sheets::new(&config);
//! let rows = client.fetch_rows(Mode::Checklist).await?;
//! println!("{} rows", rows.len());
//! # Ok(())
//! # }
//! ```

use super::RowSource;
use crate::libs::cell::{CellValue, Row};
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::mode::Mode;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("sheet '{sheet}' answered with status {status}")]
    Status { sheet: String, status: u16 },
    #[error("response is not a sheet document")]
    Malformed,
    #[error("response could not be decoded: {0}")]
    Json(#[from] serde_json::Error),
    #[error("sheet query failed: {0}")]
    Query(String),
}

/// Connection settings of the task spreadsheet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SheetsConfig {
    /// Base URL under which spreadsheets are published
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Spreadsheet document id
    pub spreadsheet_id: String,
    /// Sheet holding checklist rows
    #[serde(default = "default_checklist_sheet")]
    pub checklist_sheet: String,
    /// Sheet holding delegation rows
    #[serde(default = "default_delegation_sheet")]
    pub delegation_sheet: String,
    /// Web app resolving usernames to e-mail addresses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_url: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_checklist_sheet() -> String {
    Mode::Checklist.default_sheet().to_string()
}

fn default_delegation_sheet() -> String {
    Mode::Delegation.default_sheet().to_string()
}

impl SheetsConfig {
    pub fn new(spreadsheet_id: &str) -> Self {
        Self {
            base_url: default_base_url(),
            spreadsheet_id: spreadsheet_id.to_string(),
            checklist_sheet: default_checklist_sheet(),
            delegation_sheet: default_delegation_sheet(),
            directory_url: None,
        }
    }

    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "sheets".to_string(),
            name: "Spreadsheet".to_string(),
        }
    }

    pub fn sheet_name(&self, mode: Mode) -> &str {
        match mode {
            Mode::Checklist => &self.checklist_sheet,
            Mode::Delegation => &self.delegation_sheet,
        }
    }

    pub fn query_url(&self) -> String {
        format!("{}/{}/gviz/tq", self.base_url.trim_end_matches('/'), self.spreadsheet_id)
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let default = config.clone().unwrap_or_else(|| SheetsConfig::new(""));
        msg_print!(Message::ConfigModuleSheets);

        let spreadsheet_id: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSpreadsheetId.to_string())
            .default(default.spreadsheet_id)
            .interact_text()?;
        let base_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptBaseUrl.to_string())
            .default(default.base_url)
            .interact_text()?;
        let checklist_sheet: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptChecklistSheet.to_string())
            .default(default.checklist_sheet)
            .interact_text()?;
        let delegation_sheet: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDelegationSheet.to_string())
            .default(default.delegation_sheet)
            .interact_text()?;
        let directory_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDirectoryUrl.to_string())
            .default(default.directory_url.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        Ok(Self {
            base_url,
            spreadsheet_id,
            checklist_sheet,
            delegation_sheet,
            directory_url: Some(directory_url.trim().to_string()).filter(|url| !url.is_empty()),
        })
    }
}

/// HTTP client for the task spreadsheet.
#[derive(Debug)]
pub struct Sheets {
    client: Client,
    config: SheetsConfig,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    status: Option<String>,
    #[serde(default)]
    errors: Vec<QueryIssue>,
    table: Option<QueryTable>,
}

#[derive(Debug, Deserialize)]
struct QueryIssue {
    #[serde(default)]
    message: String,
    #[serde(default)]
    detailed_message: String,
}

#[derive(Debug, Deserialize)]
struct QueryTable {
    #[serde(default)]
    rows: Vec<QueryRow>,
}

#[derive(Debug, Deserialize)]
struct QueryRow {
    c: Option<Vec<Option<QueryCell>>>,
}

#[derive(Debug, Deserialize)]
struct QueryCell {
    v: Option<CellValue>,
}

#[derive(Debug, Deserialize)]
struct DirectoryEntry {
    #[serde(default)]
    success: bool,
    email: Option<String>,
}

impl Sheets {
    pub fn new(config: &SheetsConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// Resolves the name to greet a user with.
    ///
    /// Uses the local part of the directory's e-mail address and falls back
    /// to the username when no directory is configured or the lookup fails.
    pub async fn display_name(&self, username: &str) -> String {
        let Some(url) = &self.config.directory_url else {
            return username.to_string();
        };

        let lookup = async {
            let response = self.client.get(url).query(&[("username", username)]).send().await?;
            response.json::<DirectoryEntry>().await
        };

        match lookup.await {
            Ok(DirectoryEntry {
                success: true,
                email: Some(email),
            }) => email.split('@').next().filter(|name| !name.is_empty()).unwrap_or(username).to_string(),
            Ok(_) => username.to_string(),
            Err(e) => {
                tracing::warn!("directory lookup for '{}' failed: {}", username, e);
                username.to_string()
            }
        }
    }
}

impl RowSource for Sheets {
    async fn fetch_rows(&self, mode: Mode) -> Result<Vec<Row>, SheetsError> {
        let sheet = self.config.sheet_name(mode);
        tracing::debug!(%mode, sheet, url = %self.config.query_url(), "fetching sheet");

        let response = self
            .client
            .get(self.config.query_url())
            .query(&[("tqx", "out:json"), ("sheet", sheet)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::Status {
                sheet: sheet.to_string(),
                status: status.as_u16(),
            });
        }

        parse_body(&response.text().await?)
    }
}

/// Extracts rows from a visualization response or a row-array payload.
pub fn parse_body(body: &str) -> Result<Vec<Row>, SheetsError> {
    let trimmed = body.trim();
    if trimmed.starts_with('[') {
        let rows: Vec<Vec<Option<CellValue>>> = serde_json::from_str(trimmed)?;
        return Ok(rows.into_iter().map(Row::new).collect());
    }

    let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) else {
        return Err(SheetsError::Malformed);
    };
    if end < start {
        return Err(SheetsError::Malformed);
    }

    let response: QueryResponse = serde_json::from_str(&trimmed[start..=end])?;
    if response.status.as_deref() == Some("error") {
        let reason = response
            .errors
            .iter()
            .map(|issue| if issue.detailed_message.is_empty() { issue.message.as_str() } else { issue.detailed_message.as_str() })
            .collect::<Vec<_>>()
            .join("; ");
        return Err(SheetsError::Query(reason));
    }

    let table = response.table.ok_or(SheetsError::Malformed)?;
    Ok(table
        .rows
        .into_iter()
        .map(|row| Row::new(row.c.unwrap_or_default().into_iter().map(|cell| cell.and_then(|cell| cell.v)).collect()))
        .collect())
}
