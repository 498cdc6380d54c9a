//! Export of dashboard snapshots for external analysis.
//!
//! A snapshot can be written as:
//!
//! - **CSV**: one table per data kind; `all` writes the tables one after
//!   another, each preceded by a title line.
//! - **JSON**: pretty-printed; `all` writes the whole snapshot.
//! - **Excel**: one worksheet per data kind.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sheetdash::libs::export::{ExportData, ExportFormat, Exporter};
//! # fn run(dashboard: &sheetdash::libs::dashboard::Dashboard) -> anyhow::Result<()> {
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(ExportData::Tasks, dashboard)?;
//! # Ok(())
//! # }
//! ```

use super::dashboard::Dashboard;
use super::date::format_date;
use super::messages::Message;
use super::summary::{StaffStats, Summary};
use super::task::Task;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Excel => write!(f, "Excel"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// The normalized task list
    Tasks,
    /// Per-staff progress
    Staff,
    /// Summary counters and chart series
    Summary,
    /// Everything above
    All,
}

impl fmt::Display for ExportData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportData::Tasks => write!(f, "tasks"),
            ExportData::Staff => write!(f, "staff"),
            ExportData::Summary => write!(f, "summary"),
            ExportData::All => write!(f, "dashboard"),
        }
    }
}

/// Flat, display-formatted task record.
#[derive(Debug, Serialize)]
pub struct ExportTask {
    pub id: String,
    pub title: String,
    pub assigned_to: String,
    pub start_date: String,
    pub completion_date: String,
    pub frequency: String,
    pub status: String,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            assigned_to: task.assigned_to.clone(),
            start_date: task.start_label(),
            completion_date: task.completion_label(),
            frequency: task.frequency.to_string(),
            status: task.status.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ExportSnapshot<'a> {
    mode: String,
    date: String,
    tasks: Vec<ExportTask>,
    summary: &'a Summary,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to a timestamped
    /// `sheetdash_export_YYYYMMDD_HHMMSS` file in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("sheetdash_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, data: ExportData, dashboard: &Dashboard) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(data, dashboard)?,
            ExportFormat::Json => self.export_json(data, dashboard)?,
            ExportFormat::Excel => self.export_excel(data, dashboard)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_json(&self, data: ExportData, dashboard: &Dashboard) -> Result<()> {
        let tasks = || dashboard.tasks.iter().map(ExportTask::from).collect::<Vec<_>>();
        let json = match data {
            ExportData::Tasks => serde_json::to_string_pretty(&tasks())?,
            ExportData::Staff => serde_json::to_string_pretty(&dashboard.summary.staff)?,
            ExportData::Summary => serde_json::to_string_pretty(&dashboard.summary)?,
            ExportData::All => serde_json::to_string_pretty(&ExportSnapshot {
                mode: dashboard.mode.to_string(),
                date: format_date(dashboard.today),
                tasks: tasks(),
                summary: &dashboard.summary,
            })?,
        };

        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_csv(&self, data: ExportData, dashboard: &Dashboard) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&self.output_path)?;

        match data {
            ExportData::Tasks => write_tasks_csv(&mut wtr, &dashboard.tasks)?,
            ExportData::Staff => write_staff_csv(&mut wtr, &dashboard.summary.staff)?,
            ExportData::Summary => write_summary_csv(&mut wtr, &dashboard.summary)?,
            ExportData::All => {
                wtr.write_record([format!("Dashboard - {} - {}", dashboard.mode, format_date(dashboard.today))])?;
                write_summary_csv(&mut wtr, &dashboard.summary)?;
                wtr.write_record([""])?;
                wtr.write_record(["Staff"])?;
                write_staff_csv(&mut wtr, &dashboard.summary.staff)?;
                wtr.write_record([""])?;
                wtr.write_record(["Tasks"])?;
                write_tasks_csv(&mut wtr, &dashboard.tasks)?;
            }
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_excel(&self, data: ExportData, dashboard: &Dashboard) -> Result<()> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        if matches!(data, ExportData::Summary | ExportData::All) {
            let worksheet = workbook.add_worksheet().set_name("Summary")?;
            write_summary_sheet(worksheet, &dashboard.summary, &header_format)?;
        }
        if matches!(data, ExportData::Staff | ExportData::All) {
            let worksheet = workbook.add_worksheet().set_name("Staff")?;
            write_staff_sheet(worksheet, &dashboard.summary.staff, &header_format)?;
        }
        if matches!(data, ExportData::Tasks | ExportData::All) {
            let worksheet = workbook.add_worksheet().set_name("Tasks")?;
            write_tasks_sheet(worksheet, &dashboard.tasks, &header_format)?;
        }

        workbook.save(&self.output_path)?;
        Ok(())
    }
}

fn write_tasks_csv(wtr: &mut csv::Writer<File>, tasks: &[Task]) -> Result<()> {
    wtr.write_record(["ID", "Title", "Assigned To", "Start Date", "Completion Date", "Frequency", "Status"])?;
    for task in tasks.iter().map(ExportTask::from) {
        wtr.write_record([
            &task.id,
            &task.title,
            &task.assigned_to,
            &task.start_date,
            &task.completion_date,
            &task.frequency,
            &task.status,
        ])?;
    }
    Ok(())
}

fn write_staff_csv(wtr: &mut csv::Writer<File>, staff: &[StaffStats]) -> Result<()> {
    wtr.write_record(["Name", "Total", "Completed", "Pending", "Progress"])?;
    for member in staff {
        wtr.write_record([
            member.name.clone(),
            member.total.to_string(),
            member.completed.to_string(),
            member.pending.to_string(),
            format!("{}%", member.progress),
        ])?;
    }
    Ok(())
}

fn write_summary_csv(wtr: &mut csv::Writer<File>, summary: &Summary) -> Result<()> {
    wtr.write_record(["Metric", "Value"])?;
    for (metric, value) in summary_metrics(summary) {
        wtr.write_record([metric.to_string(), value])?;
    }

    wtr.write_record([""])?;
    wtr.write_record(["Month", "Completed", "Pending"])?;
    for month in &summary.monthly {
        wtr.write_record([month.name.to_string(), month.completed.to_string(), month.pending.to_string()])?;
    }
    Ok(())
}

fn write_tasks_sheet(worksheet: &mut Worksheet, tasks: &[Task], header_format: &Format) -> Result<()> {
    let headers = ["ID", "Title", "Assigned To", "Start Date", "Completion Date", "Frequency", "Status"];
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, header_format)?;
    }

    for (i, task) in tasks.iter().map(ExportTask::from).enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, &task.id)?;
        worksheet.write_string(row, 1, &task.title)?;
        worksheet.write_string(row, 2, &task.assigned_to)?;
        worksheet.write_string(row, 3, &task.start_date)?;
        worksheet.write_string(row, 4, &task.completion_date)?;
        worksheet.write_string(row, 5, &task.frequency)?;
        worksheet.write_string(row, 6, &task.status)?;
    }

    worksheet.autofit();
    Ok(())
}

fn write_staff_sheet(worksheet: &mut Worksheet, staff: &[StaffStats], header_format: &Format) -> Result<()> {
    let headers = ["Name", "Total", "Completed", "Pending", "Progress %"];
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, header_format)?;
    }

    for (i, member) in staff.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, &member.name)?;
        worksheet.write_number(row, 1, member.total as f64)?;
        worksheet.write_number(row, 2, member.completed as f64)?;
        worksheet.write_number(row, 3, member.pending as f64)?;
        worksheet.write_number(row, 4, member.progress as f64)?;
    }

    worksheet.autofit();
    Ok(())
}

fn write_summary_sheet(worksheet: &mut Worksheet, summary: &Summary, header_format: &Format) -> Result<()> {
    worksheet.write_string_with_format(0, 0, "Metric", header_format)?;
    worksheet.write_string_with_format(0, 1, "Value", header_format)?;

    let mut row = 1;
    for (metric, value) in summary_metrics(summary) {
        worksheet.write_string(row, 0, metric)?;
        worksheet.write_string(row, 1, &value)?;
        row += 1;
    }

    row += 1;
    worksheet.write_string_with_format(row, 0, "Month", header_format)?;
    worksheet.write_string_with_format(row, 1, "Completed", header_format)?;
    worksheet.write_string_with_format(row, 2, "Pending", header_format)?;
    for month in &summary.monthly {
        row += 1;
        worksheet.write_string(row, 0, month.name)?;
        worksheet.write_number(row, 1, month.completed as f64)?;
        worksheet.write_number(row, 2, month.pending as f64)?;
    }

    worksheet.autofit();
    Ok(())
}

fn summary_metrics(summary: &Summary) -> Vec<(&'static str, String)> {
    vec![
        ("Total", summary.total.to_string()),
        ("Completed", summary.completed.to_string()),
        ("Pending", summary.pending.to_string()),
        ("Overdue", summary.overdue.to_string()),
        ("Completion rate", format!("{:.1}%", summary.completion_rate)),
        ("Completed once", summary.ratings.once.to_string()),
        ("Completed twice", summary.ratings.twice.to_string()),
        ("Completed three or more times", summary.ratings.three_plus.to_string()),
    ]
}
