//! Named-field adapter over the positional sheet layout.
//!
//! The task sheets identify fields purely by column position. This module is
//! the single place that knows those offsets; everything downstream works
//! with [`RawTask`] and its semantic field names. Changing the sheet layout
//! means changing the constructors below and nothing else.

use super::cell::{CellValue, Row};

/// Zero-based column offsets for one sheet layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Column B, "Task ID"
    pub id: usize,
    /// Column E, "Name"
    pub assignee: usize,
    /// Column F, "Task Description"
    pub title: usize,
    /// Column G, "Task Start Date"
    pub start_date: usize,
    /// Column H, "Freq"
    pub frequency: usize,
    /// "Actual" completion timestamp
    pub completion_date: usize,
    /// Column R, completion count; only some sheets carry it
    pub rating: Option<usize>,
}

impl ColumnLayout {
    /// Layout of the checklist sheet ("Actual" in column K).
    pub const fn checklist() -> Self {
        Self {
            id: 1,
            assignee: 4,
            title: 5,
            start_date: 6,
            frequency: 7,
            completion_date: 10,
            rating: None,
        }
    }

    /// Layout of the delegation sheet ("Actual" in column L, rating in R).
    pub const fn delegation() -> Self {
        Self {
            id: 1,
            assignee: 4,
            title: 5,
            start_date: 6,
            frequency: 7,
            completion_date: 11,
            rating: Some(17),
        }
    }

    /// Reads a row into semantic fields without interpreting them.
    pub fn read<'a>(&self, row: &'a Row) -> RawTask<'a> {
        RawTask {
            id: row.text(self.id),
            assignee: row.text(self.assignee),
            title: row.text(self.title),
            start_date: row.get(self.start_date),
            frequency: row.text(self.frequency),
            completion_date: row.get(self.completion_date),
            rating: self.rating.and_then(|index| row.get(index)).and_then(CellValue::as_integer),
        }
    }
}

/// A row's fields by name, still in their raw cell form.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTask<'a> {
    pub id: Option<String>,
    pub assignee: Option<String>,
    pub title: Option<String>,
    pub start_date: Option<&'a CellValue>,
    pub frequency: Option<String>,
    pub completion_date: Option<&'a CellValue>,
    pub rating: Option<i64>,
}
