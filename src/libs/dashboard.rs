//! Dashboard snapshots and fetch bookkeeping.
//!
//! A [`Dashboard`] is everything derived from one fetch of one mode's sheet:
//! the normalized task list and its summary. Snapshots are rebuilt from
//! scratch and replace the previous one wholesale.
//!
//! [`DashboardState`] tracks which fetch is current. Each fetch is issued a
//! [`FetchTicket`] carrying the mode and a generation number; switching mode
//! bumps the generation, so a response that arrives after a switch no longer
//! matches and is discarded instead of overwriting the newer view. A failed
//! fetch leaves the last good snapshot in place and records the failure for
//! display.

use super::cell::Row;
use super::filter::{visible, TaskFilter, View};
use super::mode::Mode;
use super::normalizer::{normalize, Context};
use super::session::Viewer;
use super::summary::Summary;
use super::task::Task;
use crate::api::{RowSource, SheetsError};
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub mode: Mode,
    pub today: NaiveDate,
    pub tasks: Vec<Task>,
    pub summary: Summary,
}

impl Dashboard {
    /// The snapshot shown before any fetch succeeded.
    pub fn empty(mode: Mode, today: NaiveDate) -> Self {
        Self {
            mode,
            today,
            tasks: Vec::new(),
            summary: Summary::build(&[], mode.rules(), today),
        }
    }

    pub fn build(rows: &[Row], ctx: &Context) -> Self {
        let tasks = normalize(rows, ctx);
        let summary = Summary::build(&tasks, ctx.mode.rules(), ctx.today);
        Self {
            mode: ctx.mode,
            today: ctx.today,
            tasks,
            summary,
        }
    }

    pub fn visible(&self, filter: &TaskFilter, view: View) -> Vec<&Task> {
        visible(&self.tasks, filter, view, self.mode.rules(), self.today)
    }

    /// Distinct assignees of the task list, sorted.
    pub fn staff_names(&self) -> Vec<&str> {
        self.tasks
            .iter()
            .map(|task| task.assigned_to.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Whether `name` is an assignee of the task list, as the staff filter matches it.
    pub fn has_staff(&self, name: &str) -> bool {
        self.staff_names().contains(&name)
    }
}

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub mode: Mode,
    pub generation: u64,
}

/// What happened to a fetch result handed to [`DashboardState::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The snapshot was replaced.
    Updated,
    /// The result belonged to an outdated fetch and was dropped.
    Stale,
    /// The fetch failed; the previous snapshot is kept.
    Failed,
}

#[derive(Debug)]
pub struct DashboardState {
    mode: Mode,
    generation: u64,
    snapshot: Dashboard,
    last_error: Option<String>,
}

impl DashboardState {
    pub fn new(mode: Mode, today: NaiveDate) -> Self {
        Self {
            mode,
            generation: 0,
            snapshot: Dashboard::empty(mode, today),
            last_error: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn snapshot(&self) -> &Dashboard {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> Dashboard {
        self.snapshot
    }

    /// Description of the most recent failed fetch, cleared on success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Switches mode. Fetches issued before the switch become stale.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            self.mode = mode;
            self.generation += 1;
        }
    }

    /// Issues a ticket for a fetch of the current mode.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket {
            mode: self.mode,
            generation: self.generation,
        }
    }

    fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.generation && ticket.mode == self.mode
    }

    /// Applies the outcome of the fetch identified by `ticket`.
    pub fn apply(&mut self, ticket: FetchTicket, result: Result<Vec<Row>, SheetsError>, viewer: &Viewer, today: NaiveDate) -> Applied {
        if !self.is_current(ticket) {
            msg_debug!(format!(
                "discarding {} response of generation {} (current: {} generation {})",
                ticket.mode, ticket.generation, self.mode, self.generation
            ));
            return Applied::Stale;
        }

        match result {
            Ok(rows) => {
                let ctx = Context::new(ticket.mode, today, viewer.clone());
                self.snapshot = Dashboard::build(&rows, &ctx);
                self.last_error = None;
                Applied::Updated
            }
            Err(e) => {
                msg_error!(Message::FetchFailed(ticket.mode.to_string(), e.to_string()));
                self.last_error = Some(e.to_string());
                Applied::Failed
            }
        }
    }

    /// Fetches the current mode's rows from `source` and applies them.
    pub async fn refresh<S: RowSource>(&mut self, source: &S, viewer: &Viewer, today: NaiveDate) -> Applied {
        let ticket = self.begin_fetch();
        let result = source.fetch_rows(ticket.mode).await;
        self.apply(ticket, result, viewer, today)
    }
}
