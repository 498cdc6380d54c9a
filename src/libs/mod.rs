//! Core library modules for sheetdash.
//!
//! ## Layout
//!
//! - **Sheet input**: [`cell`], [`columns`], [`date`]
//! - **Task model**: [`task`], [`mode`], [`normalizer`]
//! - **Derived data**: [`summary`], [`filter`], [`dashboard`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`session`], [`messages`]
//! - **Output**: [`view`], [`export`]
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sheetdash::libs::cell::Row;
//! use sheetdash::libs::dashboard::Dashboard;
//! use sheetdash::libs::mode::Mode;
//! use sheetdash::libs::normalizer::Context;
//! use sheetdash::libs::session::Viewer;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
//! let ctx = Context::new(Mode::Checklist, today, Viewer::admin("admin"));
//! let dashboard = Dashboard::build(&Vec::<Row>::new(), &ctx);
//! assert_eq!(dashboard.summary.total, 0);
//! ```

pub mod cell;
pub mod columns;
pub mod config;
pub mod dashboard;
pub mod data_storage;
pub mod date;
pub mod export;
pub mod filter;
pub mod messages;
pub mod mode;
pub mod normalizer;
pub mod session;
pub mod summary;
pub mod task;
pub mod view;
