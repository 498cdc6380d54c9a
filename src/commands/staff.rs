use super::{load_dashboard, DataArgs};
use crate::{
    libs::{messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StaffArgs {
    #[command(flatten)]
    data: DataArgs,
}

pub async fn cmd(staff_args: StaffArgs) -> Result<()> {
    let dashboard = load_dashboard(&staff_args.data).await?;

    msg_print!(Message::StaffHeader(dashboard.mode.to_string()), true);
    View::staff(&dashboard.summary)?;

    Ok(())
}
