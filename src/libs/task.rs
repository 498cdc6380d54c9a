use super::date::format_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Title shown for rows without a task description.
pub const UNTITLED: &str = "Untitled Task";

/// Assignee recorded for rows without a name.
pub const UNASSIGNED: &str = "Unassigned";

/// A normalized task row.
///
/// `status` is always the result of [`classify`] for the task's own
/// completion and start date; it is never set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub assigned_to: String,
    pub start_date: Option<NaiveDate>,
    pub completion: Option<Completion>,
    pub frequency: Frequency,
    pub status: Status,
    /// Completion count from the rating column, when the sheet has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_code: Option<i64>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }

    /// Calendar day of completion, when the completion cell held a date.
    pub fn completion_date(&self) -> Option<NaiveDate> {
        match self.completion {
            Some(Completion::Dated(date)) => Some(date),
            _ => None,
        }
    }

    pub fn start_label(&self) -> String {
        self.start_date.map(format_date).unwrap_or_default()
    }

    pub fn completion_label(&self) -> String {
        match &self.completion {
            Some(Completion::Dated(date)) => format_date(*date),
            Some(Completion::Undated(text)) => text.clone(),
            None => String::new(),
        }
    }
}

/// Content of a non-empty completion cell.
///
/// A completion cell that holds something other than a recognizable date
/// still marks the task completed; it just has no calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Completion {
    Dated(NaiveDate),
    Undated(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Completed,
    Overdue,
    Pending,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Completed => "completed",
            Status::Overdue => "overdue",
            Status::Pending => "pending",
        };
        write!(f, "{}", label)
    }
}

/// Derives a task's status.
///
/// A completion mark wins; otherwise a start date strictly before `today` is
/// overdue, and anything else (today, the future, or no start date) is
/// pending.
pub fn classify(completed: bool, start_date: Option<NaiveDate>, today: NaiveDate) -> Status {
    if completed {
        return Status::Completed;
    }
    match start_date {
        Some(start) if start < today => Status::Overdue,
        _ => Status::Pending,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    #[default]
    OneTime,
    Daily,
    Weekly,
    Fortnightly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    /// Reads the recurrence tag of a row; unknown or missing tags are one-time.
    pub fn parse(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Frequency::OneTime;
        };
        let key: String = value.trim().to_lowercase().chars().filter(|c| c.is_ascii_alphabetic()).collect();
        match key.as_str() {
            "daily" | "day" => Frequency::Daily,
            "weekly" | "week" => Frequency::Weekly,
            "fortnightly" | "fortnight" | "biweekly" => Frequency::Fortnightly,
            "monthly" | "month" => Frequency::Monthly,
            "quarterly" | "quarter" => Frequency::Quarterly,
            "yearly" | "year" | "annually" | "annual" => Frequency::Yearly,
            _ => Frequency::OneTime,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::OneTime => "one-time",
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Fortnightly => "fortnightly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Yearly => "yearly",
        };
        write!(f, "{}", label)
    }
}
