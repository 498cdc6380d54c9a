//! Configuration management for sheetdash.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). Every section is optional so that a partially configured
//! installation still runs:
//!
//! - **sheets**: where the task spreadsheet is published
//! - **dashboard**: default mode and session length
//!
//! Values from the environment (and a `.env` file loaded at start-up) take
//! precedence over the file:
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `SHEETDASH_SPREADSHEET_ID` | `sheets.spreadsheet_id` |
//! | `SHEETDASH_BASE_URL` | `sheets.base_url` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sheetdash::libs::config::Config;
//!
//! let config = Config::read()?.with_env();
//! if let Some(sheets) = &config.sheets {
//!     println!("Spreadsheet: {}", sheets.spreadsheet_id);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::mode::Mode;
use super::session::DEFAULT_TIMEOUT_MINUTES;
use crate::api::sheets::SheetsConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::Duration;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const SPREADSHEET_ID_ENV: &str = "SHEETDASH_SPREADSHEET_ID";
pub const BASE_URL_ENV: &str = "SHEETDASH_BASE_URL";

/// A configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Dashboard behaviour settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    /// Mode used when a command does not pass `--mode`
    pub default_mode: Mode,

    /// Session length in minutes, counted from sign-in.
    pub session_timeout: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            default_mode: Mode::Checklist,
            session_timeout: DEFAULT_TIMEOUT_MINUTES,
        }
    }
}

impl DashboardConfig {
    pub fn session_timeout(&self) -> Duration {
        Duration::minutes(self.session_timeout as i64)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheets: Option<SheetsConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardConfig>,
}

impl Config {
    /// Reads the configuration file, or returns the default configuration
    /// when there is none yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Applies environment overrides on top of the file settings.
    pub fn with_env(mut self) -> Self {
        if let Some(id) = env::var(SPREADSHEET_ID_ENV).ok().filter(|id| !id.trim().is_empty()) {
            match self.sheets.as_mut() {
                Some(sheets) => sheets.spreadsheet_id = id,
                None => self.sheets = Some(SheetsConfig::new(&id)),
            }
        }

        if let Some(url) = env::var(BASE_URL_ENV).ok().filter(|url| !url.trim().is_empty()) {
            if let Some(sheets) = self.sheets.as_mut() {
                sheets.base_url = url;
            }
        }

        self
    }

    pub fn dashboard(&self) -> DashboardConfig {
        self.dashboard.clone().unwrap_or_default()
    }

    /// Runs the interactive setup wizard, starting from the current settings.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![
            SheetsConfig::module(),
            ConfigModule {
                key: "dashboard".to_string(),
                name: "Dashboard".to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "sheets" => config.sheets = Some(SheetsConfig::init(&config.sheets)?),
                "dashboard" => {
                    let default = config.dashboard();
                    msg_print!(Message::ConfigModuleDashboard);

                    let modes = [Mode::Checklist, Mode::Delegation];
                    let default_index = modes.iter().position(|mode| *mode == default.default_mode).unwrap_or(0);
                    let mode_index = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultMode.to_string())
                        .items(&modes)
                        .default(default_index)
                        .interact()?;

                    config.dashboard = Some(DashboardConfig {
                        default_mode: modes[mode_index],
                        session_timeout: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptSessionTimeout.to_string())
                            .default(default.session_timeout)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
