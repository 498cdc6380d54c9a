//! Viewer identity and the local sign-in session.
//!
//! The session is a plaintext marker in the data directory holding who is
//! signed in, their role and when they signed in. It is not a security
//! boundary: it only decides which rows a viewer gets to see. Sessions have
//! a fixed length counted from sign-in; activity does not extend them.
//!
//! The rest of the crate never reads the session file directly. Commands turn
//! it into a [`Viewer`] and pass that down explicitly.

use super::data_storage::DataStorage;
use super::messages::Message;
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const SESSION_FILE_NAME: &str = "session.json";

/// Default session length in minutes.
pub const DEFAULT_TIMEOUT_MINUTES: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// Who is looking at the dashboard.
///
/// Privileged viewers see every row; everyone else only sees rows assigned to
/// them, matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    identity: String,
    privileged: bool,
}

impl Viewer {
    pub fn admin(identity: &str) -> Self {
        Self {
            identity: identity.to_string(),
            privileged: true,
        }
    }

    pub fn user(identity: &str) -> Self {
        Self {
            identity: identity.to_string(),
            privileged: false,
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn is_privileged(&self) -> bool {
        self.privileged
    }

    pub fn can_see(&self, assignee: &str) -> bool {
        self.privileged || assignee.trim().to_lowercase() == self.identity.trim().to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub role: Role,
    pub started_at: DateTime<Local>,
}

impl Session {
    pub fn new(username: &str, role: Role) -> Self {
        Self {
            username: username.to_string(),
            role,
            started_at: Local::now(),
        }
    }

    /// A session is expired once strictly more than `timeout` has passed
    /// since sign-in.
    pub fn is_expired(&self, now: DateTime<Local>, timeout: Duration) -> bool {
        now - self.started_at > timeout
    }

    pub fn viewer(&self) -> Viewer {
        match self.role {
            Role::Admin => Viewer::admin(&self.username),
            Role::User => Viewer::user(&self.username),
        }
    }

    /// Loads the current session.
    ///
    /// Returns `None` when nobody is signed in. An expired session is removed
    /// and also reported as `None`.
    pub fn read(timeout: Duration) -> anyhow::Result<Option<Session>> {
        let path = DataStorage::new().get_path(SESSION_FILE_NAME)?;
        if !path.exists() {
            return Ok(None);
        }

        let session: Session = serde_json::from_str(&fs::read_to_string(&path)?)?;
        if session.is_expired(Local::now(), timeout) {
            tracing::debug!("session of '{}' expired, removing it", session.username);
            fs::remove_file(&path)?;
            return Ok(None);
        }

        Ok(Some(session))
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path = DataStorage::new().get_path(SESSION_FILE_NAME)?;
        let file = File::create(path)?;
        serde_json::to_writer_pretty(&file, &self)?;
        Ok(())
    }

    /// Removes the session file. Returns `false` when there was none.
    pub fn clear() -> anyhow::Result<bool> {
        let path = DataStorage::new().get_path(SESSION_FILE_NAME)?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }
}

/// Time-of-day greeting for the given hour (0-23).
pub fn greeting(hour: u32, name: &str) -> Message {
    match hour {
        0..=11 => Message::GreetingMorning(name.to_string()),
        12..=16 => Message::GreetingAfternoon(name.to_string()),
        _ => Message::GreetingEvening(name.to_string()),
    }
}
