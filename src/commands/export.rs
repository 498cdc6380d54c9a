//! Dashboard export command.
//!
//! Writes the current snapshot of one mode to a file:
//!
//! - **tasks**: the normalized task list
//! - **staff**: per-staff progress
//! - **summary**: counters plus the monthly series
//! - **all**: everything above
//!
//! ```bash
//! sheetdash export tasks --format json
//! sheetdash export all --format excel --output dashboard.xlsx --mode delegation
//! ```

use super::{load_dashboard, DataArgs};
use crate::{
    libs::{
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Which data to export
    #[arg(value_enum, default_value = "all")]
    data: ExportData,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file; defaults to `sheetdash_export_<timestamp>.<ext>`
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    data_args: DataArgs,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let dashboard = load_dashboard(&args.data_args).await?;

    msg_info!(Message::ExportingData(args.data.to_string(), args.format.to_string()));
    Exporter::new(args.format, args.output).export(args.data, &dashboard)
}
