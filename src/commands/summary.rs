use super::{load_dashboard, DataArgs};
use crate::{
    libs::{date::format_date, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    data: DataArgs,
}

pub async fn cmd(summary_args: SummaryArgs) -> Result<()> {
    let dashboard = load_dashboard(&summary_args.data).await?;

    msg_print!(Message::SummaryHeader(dashboard.mode.to_string(), format_date(dashboard.today)), true);
    View::summary(&dashboard)?;

    msg_print!(Message::MonthlyHeader, true);
    View::monthly(&dashboard.summary)?;

    msg_print!(Message::StatusHeader, true);
    View::statuses(&dashboard.summary)?;

    Ok(())
}
