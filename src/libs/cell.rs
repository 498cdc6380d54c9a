//! Typed spreadsheet cells and fixed-width rows.
//!
//! The data source delivers every row as an ordered sequence of cell values.
//! Column position is the only way a field is identified, so a [`Row`] is a
//! thin wrapper over a vector of optional cells with position-based access.
//!
//! Cells come in three JSON shapes: booleans, numbers and strings. Empty
//! cells arrive as `null` (or are missing entirely at the end of a row) and
//! are represented as `None`.

use serde::{Deserialize, Serialize};

/// A single non-empty cell value as delivered by the spreadsheet endpoint.
///
/// Spreadsheet-native dates are not a separate variant: the visualization
/// endpoint encodes them as `Date(y,m,d)` text, which the date codec in
/// [`crate::libs::date`] understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Renders the cell as text.
    ///
    /// Whole numbers drop their fractional part so that a numeric id such as
    /// `42.0` reads as `"42"`.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Bool(value) => value.to_string(),
            CellValue::Number(value) if value.fract() == 0.0 && value.abs() < 1e15 => format!("{}", *value as i64),
            CellValue::Number(value) => value.to_string(),
            CellValue::Text(value) => value.clone(),
        }
    }

    /// Returns `true` when the cell carries no meaningful content.
    ///
    /// An unticked checkbox (`false`) counts as empty.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Text(value) => value.trim().is_empty(),
            CellValue::Bool(value) => !value,
            CellValue::Number(_) => false,
        }
    }

    /// Interprets the cell as an integer, accepting whole numbers and
    /// numeric text.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Number(value) if value.fract() == 0.0 => Some(*value as i64),
            CellValue::Text(value) => value.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// One spreadsheet row addressed by zero-based column index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: Vec<Option<CellValue>>,
}

impl Row {
    pub fn new(cells: Vec<Option<CellValue>>) -> Self {
        Self { cells }
    }

    /// Returns the cell at `index`, treating blank text as empty.
    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index).and_then(|cell| cell.as_ref()).filter(|cell| !cell.is_blank())
    }

    /// Returns the trimmed text of the cell at `index`, if it has any.
    pub fn text(&self, index: usize) -> Option<String> {
        self.get(index).map(|cell| cell.as_text().trim().to_string()).filter(|text| !text.is_empty())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl From<Vec<Option<CellValue>>> for Row {
    fn from(cells: Vec<Option<CellValue>>) -> Self {
        Self::new(cells)
    }
}
