//! Data-source clients.
//!
//! The dashboard core only needs "the rows of the sheet for this mode". That
//! seam is the [`RowSource`] trait; [`sheets::Sheets`] implements it over
//! HTTP, and tests implement it over fixed rows.

use crate::libs::cell::Row;
use crate::libs::mode::Mode;

pub mod sheets;

pub use sheets::{Sheets, SheetsConfig, SheetsError};

/// Anything that can deliver the raw rows of a mode's sheet.
#[allow(async_fn_in_trait)]
pub trait RowSource {
    async fn fetch_rows(&self, mode: Mode) -> Result<Vec<Row>, SheetsError>;
}
