//! Visible-task selection.
//!
//! Selection runs in two stages over the normalized task list:
//!
//! 1. A [`TaskFilter`] predicate chain (search text, staff member, status),
//!    all conditions AND-combined.
//! 2. A [`View`] selector by start date relative to today. Completed tasks
//!    and tasks without a start date never appear in any view.
//!
//! Selection is independent of the summary counters; it borrows from the same
//! task list and computes its own projection.

use super::mode::ModeRules;
use super::task::{Status, Task};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Tasks starting today
    #[default]
    Recent,
    /// Tasks starting after today (tomorrow only in checklist mode)
    Upcoming,
    /// Tasks that started before today
    Overdue,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Recent => write!(f, "recent"),
            View::Upcoming => write!(f, "upcoming"),
            View::Overdue => write!(f, "overdue"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub search: Option<String>,
    pub staff: Option<String>,
    pub status: Option<Status>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }

        if let Some(staff) = &self.staff {
            if &task.assigned_to != staff {
                return false;
            }
        }

        match self.search.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => {
                let query = query.to_lowercase();
                [&task.title, &task.id, &task.assigned_to]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&query))
            }
            _ => true,
        }
    }
}

/// Whether a task belongs to `view` on `today`.
pub fn in_view(task: &Task, view: View, rules: &dyn ModeRules, today: NaiveDate) -> bool {
    if task.is_completed() {
        return false;
    }
    let Some(start) = task.start_date else {
        return false;
    };

    match view {
        View::Recent => start == today,
        View::Upcoming => rules.is_upcoming(start, today),
        View::Overdue => start < today,
    }
}

/// Applies the filter chain and then the view selector, keeping list order.
pub fn visible<'a>(tasks: &'a [Task], filter: &TaskFilter, view: View, rules: &dyn ModeRules, today: NaiveDate) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .filter(|task| in_view(task, view, rules, today))
        .collect()
}
