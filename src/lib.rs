//! # Sheetdash - spreadsheet-backed task dashboard
//!
//! Reads task rows from a published spreadsheet, classifies every task as
//! completed, pending or overdue, and aggregates the result into summary
//! counters, chart series, staff breakdowns and filterable task views.
//!
//! ## Features
//!
//! - **Two sheet modes**: checklist (recurring tasks) and delegation
//!   (one-off assignments), each with its own column layout and date rules
//! - **Summary statistics**: totals, completion rate, monthly and status series
//! - **Staff progress**: per-assignee counters grouped into performance tiers
//! - **Task views**: recent, upcoming and overdue tasks with search filters
//! - **Data export**: CSV, JSON and Excel snapshots
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sheetdash::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
