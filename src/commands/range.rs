use super::{load_dashboard, DataArgs};
use crate::{
    libs::{
        date::{format_date, parse_sheet_date},
        messages::Message,
        summary::range_stats,
        view::View,
    },
    msg_error_anyhow, msg_print,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct RangeArgs {
    /// First start date of the window (DD/MM/YYYY or YYYY-MM-DD)
    #[arg(required = true)]
    from: String,

    /// Last start date of the window, inclusive
    #[arg(required = true)]
    to: String,

    #[command(flatten)]
    data: DataArgs,
}

pub async fn cmd(range_args: RangeArgs) -> Result<()> {
    let from = parse_argument(&range_args.from)?;
    let to = parse_argument(&range_args.to)?;

    let dashboard = load_dashboard(&range_args.data).await?;
    let stats = range_stats(&dashboard.tasks, from, to).map_err(|e| msg_error_anyhow!(Message::InvalidRange(e.to_string())))?;

    msg_print!(Message::RangeHeader(format_date(from), format_date(to)), true);
    View::range(&stats)?;

    Ok(())
}

fn parse_argument(value: &str) -> Result<NaiveDate> {
    parse_sheet_date(value).map_err(|_| msg_error_anyhow!(Message::InvalidDate(value.to_string())))
}
