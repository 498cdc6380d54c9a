use crate::{
    libs::{messages::Message, session::Session},
    msg_info, msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    if Session::clear()? {
        msg_success!(Message::SignedOut);
    } else {
        msg_info!(Message::AlreadySignedOut);
    }
    Ok(())
}
