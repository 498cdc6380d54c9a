//! Command-line interface.
//!
//! Every data command loads one dashboard snapshot for the requested mode
//! (or the configured default) on behalf of the signed-in viewer, then
//! renders or exports it.

pub mod export;
pub mod init;
pub mod login;
pub mod logout;
pub mod range;
pub mod staff;
pub mod summary;
pub mod tasks;

use crate::{
    api::Sheets,
    libs::{
        config::Config,
        dashboard::{Applied, Dashboard, DashboardState},
        messages::Message,
        mode::Mode,
        session::Session,
    },
    msg_bail_anyhow, msg_warning,
};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Sign in to the dashboard", arg_required_else_help = true)]
    Login(login::LoginArgs),
    #[command(about = "Sign out")]
    Logout,
    #[command(about = "Show summary statistics")]
    Summary(summary::SummaryArgs),
    #[command(about = "List tasks of a view")]
    Tasks(tasks::TasksArgs),
    #[command(about = "Show staff progress")]
    Staff(staff::StaffArgs),
    #[command(about = "Show statistics for tasks starting within a date range", arg_required_else_help = true)]
    Range(range::RangeArgs),
    #[command(about = "Export dashboard data to CSV, JSON or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login(args) => login::cmd(args).await,
            Commands::Logout => logout::cmd(),
            Commands::Summary(args) => summary::cmd(args).await,
            Commands::Tasks(args) => tasks::cmd(args).await,
            Commands::Staff(args) => staff::cmd(args).await,
            Commands::Range(args) => range::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}

/// Options shared by every command that reads the sheet.
#[derive(Debug, Clone, Args)]
pub struct DataArgs {
    /// Sheet to read; defaults to the configured mode
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,
}

/// Fetches and builds the dashboard for the signed-in viewer.
///
/// A failed fetch is reported and yields an empty dashboard, so commands
/// still render their (empty) layout.
pub(crate) async fn load_dashboard(args: &DataArgs) -> Result<Dashboard> {
    let config = Config::read()?.with_env();
    let Some(sheets) = config.sheets.as_ref().filter(|sheets| !sheets.spreadsheet_id.trim().is_empty()) else {
        msg_bail_anyhow!(Message::SheetsNotConfigured);
    };

    let dashboard_config = config.dashboard();
    let Some(session) = Session::read(dashboard_config.session_timeout())? else {
        msg_bail_anyhow!(Message::NotSignedIn);
    };

    let mode = args.mode.unwrap_or(dashboard_config.default_mode);
    let today = Local::now().date_naive();
    let mut state = DashboardState::new(mode, today);

    if state.refresh(&Sheets::new(sheets), &session.viewer(), today).await == Applied::Failed {
        if let Some(error) = state.last_error() {
            msg_warning!(Message::DashboardUnavailable(error.to_string()));
        }
    }

    Ok(state.into_snapshot())
}
