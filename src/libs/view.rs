use super::dashboard::Dashboard;
use super::messages::Message;
use super::mode::Mode;
use super::summary::{RangeStats, StaffStats, Summary, Tier};
use super::task::Task;
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints the summary cards, plus the rating buckets in delegation mode.
    pub fn summary(dashboard: &Dashboard) -> Result<()> {
        let summary = &dashboard.summary;
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "COMPLETED", "PENDING", "OVERDUE", "COMPLETION RATE"]);
        table.add_row(row![
            summary.total,
            summary.completed,
            summary.pending,
            summary.overdue,
            format!("{:.1}%", summary.completion_rate)
        ]);
        table.printstd();

        if dashboard.mode == Mode::Delegation {
            msg_print!(Message::RatingsHeader, true);
            let mut ratings = Table::new();
            ratings.add_row(row!["ONCE", "TWICE", "THREE OR MORE"]);
            ratings.add_row(row![summary.ratings.once, summary.ratings.twice, summary.ratings.three_plus]);
            ratings.printstd();
        }

        Ok(())
    }

    pub fn monthly(summary: &Summary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["MONTH", "COMPLETED", "PENDING"]);
        for month in &summary.monthly {
            table.add_row(row![month.name, month.completed, month.pending]);
        }
        table.printstd();

        Ok(())
    }

    pub fn statuses(summary: &Summary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["STATUS", "TASKS", "COLOR"]);
        for slice in &summary.statuses {
            table.add_row(row![slice.name, slice.value, slice.color]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints staff grouped by performance tier, best first.
    pub fn staff(summary: &Summary) -> Result<()> {
        if summary.staff.is_empty() {
            msg_print!(Message::NoStaff);
            return Ok(());
        }

        for (tier, header) in [
            (Tier::High, Message::StaffTierHigh),
            (Tier::Moderate, Message::StaffTierModerate),
            (Tier::Low, Message::StaffTierLow),
        ] {
            msg_print!(header, true);
            let members: Vec<&StaffStats> = summary.staff_in_tier(tier).collect();
            if members.is_empty() {
                msg_print!(Message::NoStaffInTier);
                continue;
            }

            let mut table = Table::new();
            table.add_row(row!["NAME", "TOTAL", "COMPLETED", "PENDING", "PROGRESS"]);
            for staff in members {
                table.add_row(row![staff.name, staff.total, staff.completed, staff.pending, format!("{}%", staff.progress)]);
            }
            table.printstd();
        }

        Ok(())
    }

    pub fn tasks(tasks: &[&Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "ASSIGNED TO", "START DATE", "FREQUENCY", "STATUS"]);
        for task in tasks {
            table.add_row(row![task.id, task.title, task.assigned_to, task.start_label(), task.frequency, task.status]);
        }
        table.printstd();

        Ok(())
    }

    pub fn range(stats: &RangeStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "COMPLETED", "PENDING", "OVERDUE", "COMPLETION RATE"]);
        table.add_row(row![
            stats.total,
            stats.completed,
            stats.pending,
            stats.overdue,
            format!("{:.1}%", stats.completion_rate)
        ]);
        table.printstd();

        Ok(())
    }
}
