//! Operating profiles of the dashboard.
//!
//! The dashboard reads one of two sheets, and each comes with its own date
//! rules. Instead of branching on the mode wherever a rule applies, each mode
//! is a [`ModeRules`] implementation and callers ask the rules object.
//!
//! | Rule | Checklist | Delegation |
//! |------|-----------|------------|
//! | Rows kept by the normalizer | start date on or before tomorrow | every row with an id |
//! | Tasks tallied in the summary | start date on or before today | every kept task |
//! | "Upcoming" view | start date is tomorrow | start date after today |
//! | Rating buckets | not tracked | tracked |

use super::columns::ColumnLayout;
use super::date::tomorrow;
use super::task::Task;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Checklist,
    Delegation,
}

impl Mode {
    pub fn rules(self) -> &'static dyn ModeRules {
        match self {
            Mode::Checklist => &ChecklistRules,
            Mode::Delegation => &DelegationRules,
        }
    }

    /// Name of the sheet holding this mode's rows.
    pub fn default_sheet(self) -> &'static str {
        match self {
            Mode::Checklist => "Checklist",
            Mode::Delegation => "DELEGATION",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Checklist => write!(f, "checklist"),
            Mode::Delegation => write!(f, "delegation"),
        }
    }
}

/// Date and counting rules for one mode.
pub trait ModeRules: Send + Sync {
    fn mode(&self) -> Mode;

    /// Column offsets of this mode's sheet.
    fn layout(&self) -> ColumnLayout;

    /// Whether a row with this start date survives normalization.
    fn keeps_row(&self, start_date: Option<NaiveDate>, today: NaiveDate) -> bool;

    /// Whether a kept task is tallied in the summary counters.
    fn counts_in_summary(&self, task: &Task, today: NaiveDate) -> bool;

    /// Whether a start date belongs to the "upcoming" view.
    fn is_upcoming(&self, start_date: NaiveDate, today: NaiveDate) -> bool;

    fn tracks_rating(&self) -> bool {
        self.layout().rating.is_some()
    }
}

pub struct ChecklistRules;

impl ModeRules for ChecklistRules {
    fn mode(&self) -> Mode {
        Mode::Checklist
    }

    fn layout(&self) -> ColumnLayout {
        ColumnLayout::checklist()
    }

    fn keeps_row(&self, start_date: Option<NaiveDate>, today: NaiveDate) -> bool {
        matches!(start_date, Some(start) if start <= tomorrow(today))
    }

    fn counts_in_summary(&self, task: &Task, today: NaiveDate) -> bool {
        matches!(task.start_date, Some(start) if start <= today)
    }

    fn is_upcoming(&self, start_date: NaiveDate, today: NaiveDate) -> bool {
        start_date == tomorrow(today)
    }
}

pub struct DelegationRules;

impl ModeRules for DelegationRules {
    fn mode(&self) -> Mode {
        Mode::Delegation
    }

    fn layout(&self) -> ColumnLayout {
        ColumnLayout::delegation()
    }

    fn keeps_row(&self, _start_date: Option<NaiveDate>, _today: NaiveDate) -> bool {
        true
    }

    fn counts_in_summary(&self, _task: &Task, _today: NaiveDate) -> bool {
        true
    }

    fn is_upcoming(&self, start_date: NaiveDate, today: NaiveDate) -> bool {
        start_date > today
    }
}
