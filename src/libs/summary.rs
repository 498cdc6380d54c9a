//! Aggregation of classified tasks into dashboard statistics.
//!
//! A single fold over the task list produces the global counters, the
//! completion-rating buckets, both chart series and the per-staff breakdown.
//!
//! ## Counting rules
//!
//! - Every non-completed task is pending; overdue tasks are *also* counted as
//!   overdue. Overdue is a subset of pending, so `completed + pending = total`
//!   and `pending >= overdue` always hold.
//! - Which tasks are tallied at all is decided by the mode's
//!   [`ModeRules::counts_in_summary`]. Staff aggregates follow the same rule,
//!   so the staff totals add up to the global total.
//! - Completed tasks land in their completion month of the monthly series;
//!   pending ones land in the current month.

use super::date::{month_index, MONTH_NAMES};
use super::mode::ModeRules;
use super::task::{Status, Task};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

pub const COMPLETED_COLOR: &str = "#22c55e";
pub const PENDING_COLOR: &str = "#facc15";
pub const OVERDUE_COLOR: &str = "#ef4444";

/// Progress at or above which a staff member is a high performer.
pub const HIGH_TIER_THRESHOLD: u32 = 70;
/// Progress at or above which a staff member is a moderate performer.
pub const MODERATE_TIER_THRESHOLD: u32 = 40;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
    pub completion_rate: f64,
    pub ratings: RatingBuckets,
    pub monthly: Vec<MonthBar>,
    pub statuses: Vec<StatusSlice>,
    pub staff: Vec<StaffStats>,
}

/// Completed tasks grouped by how many times they were completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RatingBuckets {
    pub once: usize,
    pub twice: usize,
    pub three_plus: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthBar {
    pub name: &'static str,
    pub completed: usize,
    pub pending: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSlice {
    pub name: &'static str,
    pub value: usize,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Moderate,
    Low,
}

impl Tier {
    pub fn from_progress(progress: u32) -> Self {
        if progress >= HIGH_TIER_THRESHOLD {
            Tier::High
        } else if progress >= MODERATE_TIER_THRESHOLD {
            Tier::Moderate
        } else {
            Tier::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffStats {
    pub id: String,
    pub name: String,
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub progress: u32,
    pub tier: Tier,
}

#[derive(Debug, Default)]
struct StaffTally {
    total: usize,
    completed: usize,
    pending: usize,
}

impl Summary {
    /// Folds `tasks` into a summary under the given mode rules.
    pub fn build(tasks: &[Task], rules: &dyn ModeRules, today: NaiveDate) -> Self {
        let mut summary = Summary {
            monthly: empty_monthly(),
            ..Summary::default()
        };
        let mut staff: HashMap<&str, StaffTally> = HashMap::new();
        let current_month = month_index(today);

        for task in tasks.iter().filter(|task| rules.counts_in_summary(task, today)) {
            let tally = staff.entry(task.assigned_to.as_str()).or_default();
            summary.total += 1;
            tally.total += 1;

            if task.is_completed() {
                summary.completed += 1;
                tally.completed += 1;

                if rules.tracks_rating() {
                    match task.rating_code {
                        Some(1) => summary.ratings.once += 1,
                        Some(2) => summary.ratings.twice += 1,
                        Some(code) if code > 2 => summary.ratings.three_plus += 1,
                        _ => {}
                    }
                }

                if let Some(date) = task.completion_date() {
                    summary.monthly[month_index(date)].completed += 1;
                }
            } else {
                summary.pending += 1;
                tally.pending += 1;
                if task.status == Status::Overdue {
                    summary.overdue += 1;
                }
                summary.monthly[current_month].pending += 1;
            }
        }

        summary.completion_rate = completion_rate(summary.completed, summary.total);
        summary.statuses = vec![
            StatusSlice {
                name: "Completed",
                value: summary.completed,
                color: COMPLETED_COLOR,
            },
            StatusSlice {
                name: "Pending",
                value: summary.pending,
                color: PENDING_COLOR,
            },
            StatusSlice {
                name: "Overdue",
                value: summary.overdue,
                color: OVERDUE_COLOR,
            },
        ];
        summary.staff = finish_staff(staff);

        tracing::debug!(
            mode = %rules.mode(),
            total = summary.total,
            completed = summary.completed,
            pending = summary.pending,
            overdue = summary.overdue,
            "built summary"
        );
        summary
    }

    /// Staff members at the given performance tier, best first.
    pub fn staff_in_tier(&self, tier: Tier) -> impl Iterator<Item = &StaffStats> {
        self.staff.iter().filter(move |staff| staff.tier == tier)
    }
}

/// `completed / total * 100` rounded to one decimal, `0.0` for no tasks.
pub fn completion_rate(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (completed as f64 / total as f64 * 1000.0).round() / 10.0
}

/// `completed / total * 100` rounded to a whole percent, `0` for no tasks.
pub fn progress(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round() as u32
}

/// Lowercases a name and joins its words with dashes.
pub fn staff_slug(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("-").to_lowercase()
}

fn empty_monthly() -> Vec<MonthBar> {
    MONTH_NAMES
        .iter()
        .map(|&name| MonthBar {
            name,
            completed: 0,
            pending: 0,
        })
        .collect()
}

fn finish_staff(staff: HashMap<&str, StaffTally>) -> Vec<StaffStats> {
    let mut staff: Vec<StaffStats> = staff
        .into_iter()
        .map(|(name, tally)| {
            let progress = progress(tally.completed, tally.total);
            StaffStats {
                id: staff_slug(name),
                name: name.to_string(),
                total: tally.total,
                completed: tally.completed,
                pending: tally.pending,
                progress,
                tier: Tier::from_progress(progress),
            }
        })
        .collect();

    staff.sort_by(|a, b| b.progress.cmp(&a.progress).then_with(|| a.name.cmp(&b.name)));
    staff
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("start date {from} is after end date {to}")]
    Inverted { from: NaiveDate, to: NaiveDate },
}

/// Counters for tasks whose start date falls in an inclusive window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeStats {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
    pub completion_rate: f64,
}

/// Tallies every task starting within `[from, to]`.
///
/// Unlike [`Summary::build`] this applies no mode inclusion rule: the window
/// alone decides which tasks count.
pub fn range_stats(tasks: &[Task], from: NaiveDate, to: NaiveDate) -> Result<RangeStats, RangeError> {
    if from > to {
        return Err(RangeError::Inverted { from, to });
    }

    let mut stats = RangeStats {
        from,
        to,
        total: 0,
        completed: 0,
        pending: 0,
        overdue: 0,
        completion_rate: 0.0,
    };

    for task in tasks {
        let Some(start) = task.start_date else { continue };
        if start < from || start > to {
            continue;
        }
        stats.total += 1;
        match task.status {
            Status::Completed => stats.completed += 1,
            Status::Overdue => {
                stats.pending += 1;
                stats.overdue += 1;
            }
            Status::Pending => stats.pending += 1,
        }
    }

    stats.completion_rate = completion_rate(stats.completed, stats.total);
    Ok(stats)
}
