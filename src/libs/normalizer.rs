//! Row normalization: raw sheet rows to canonical [`Task`] records.
//!
//! A row is dropped (never an error) when it is the header row, when the
//! viewer may not see it, when it has no task id, or when the mode's date
//! rule rejects its start date. Malformed dates are only logged at debug
//! level; a bad row never fails the whole fetch.

use super::cell::Row;
use super::date::parse_cell_date;
use super::mode::Mode;
use super::session::Viewer;
use super::task::{classify, Completion, Frequency, Task, UNASSIGNED, UNTITLED};
use crate::msg_debug;
use chrono::NaiveDate;

/// Everything normalization and aggregation depend on besides the rows.
#[derive(Debug, Clone)]
pub struct Context {
    pub mode: Mode,
    pub today: NaiveDate,
    pub viewer: Viewer,
}

impl Context {
    pub fn new(mode: Mode, today: NaiveDate, viewer: Viewer) -> Self {
        Self { mode, today, viewer }
    }
}

/// Normalizes the row at position `index`, or returns `None` to drop it.
pub fn normalize_row(index: usize, row: &Row, ctx: &Context) -> Option<Task> {
    if index == 0 {
        return None;
    }

    let rules = ctx.mode.rules();
    let raw = rules.layout().read(row);

    let assigned_to = raw.assignee.unwrap_or_else(|| UNASSIGNED.to_string());
    if !ctx.viewer.can_see(&assigned_to) {
        return None;
    }

    let Some(id) = raw.id else {
        msg_debug!(format!("row {}: dropped, no task id", index + 1));
        return None;
    };

    let start_date = match raw.start_date.map(parse_cell_date) {
        Some(Ok(date)) => Some(date),
        Some(Err(e)) => {
            msg_debug!(format!("row {}: unreadable start date: {}", index + 1, e));
            None
        }
        None => None,
    };

    if !rules.keeps_row(start_date, ctx.today) {
        msg_debug!(format!("row {}: start date outside the {} window", index + 1, ctx.mode));
        return None;
    }

    let completion = raw.completion_date.map(|cell| match parse_cell_date(cell) {
        Ok(date) => Completion::Dated(date),
        Err(_) => Completion::Undated(cell.as_text().trim().to_string()),
    });

    let status = classify(completion.is_some(), start_date, ctx.today);

    Some(Task {
        id,
        title: raw.title.unwrap_or_else(|| UNTITLED.to_string()),
        assigned_to,
        start_date,
        completion,
        frequency: Frequency::parse(raw.frequency.as_deref()),
        status,
        rating_code: raw.rating,
    })
}

/// Normalizes a whole sheet, keeping row order.
pub fn normalize(rows: &[Row], ctx: &Context) -> Vec<Task> {
    let tasks: Vec<Task> = rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| normalize_row(index, row, ctx))
        .collect();

    tracing::debug!(mode = %ctx.mode, rows = rows.len(), kept = tasks.len(), "normalized sheet rows");
    tasks
}
