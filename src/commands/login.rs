use crate::{
    api::Sheets,
    libs::{
        config::Config,
        messages::Message,
        session::{greeting, Role, Session},
    },
    msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Local, Timelike};
use clap::Args;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Name the sheet uses in its assignee column
    #[arg(required = true)]
    name: String,

    /// Sign in as administrator and see every staff member's tasks
    #[arg(long)]
    admin: bool,
}

pub async fn cmd(login_args: LoginArgs) -> Result<()> {
    let role = if login_args.admin { Role::Admin } else { Role::User };
    let name = login_args.name.trim();

    let session = Session::new(name, role);
    session.save()?;

    let role_label = match role {
        Role::Admin => "admin",
        Role::User => "user",
    };
    msg_success!(Message::SignedIn(session.username.clone(), role_label.to_string()));

    let display_name = match Config::read()?.with_env().sheets {
        Some(sheets) => Sheets::new(&sheets).display_name(name).await,
        None => name.to_string(),
    };
    msg_print!(greeting(Local::now().hour(), &display_name));

    Ok(())
}
