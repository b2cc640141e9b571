#![deny(unsafe_code)]

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Conventional name of the numeric column the pipeline operates on.
pub const TARGET_COLUMN: &str = "Sales";

/// A single cell of a dataset.
///
/// The target column holds `Number` after a successful coercion and `Missing`
/// after a failed one; every other column passes through as `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    /// Returns the contained number, or `None` for text and missing cells.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            CellValue::Text(_) | CellValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn cell(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Numeric value of `column`, `None` when the cell is missing or textual.
    pub fn number(&self, column: &str) -> Option<f64> {
        self.cells.get(column).and_then(CellValue::as_number)
    }

    pub fn set_cell(&mut self, column: &str, value: CellValue) {
        self.cells.insert(column.to_string(), value);
    }
}

/// An ordered sequence of rows sharing one column set.
///
/// `columns` preserves the header order of the source text; `target` names
/// the single numerically coerced column. Rows keep insertion order until a
/// sort is requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub target: String,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, target: impl Into<String>) -> Self {
        Self {
            columns,
            target: target.into(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Target-column values in row order.
    pub fn target_numbers(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.rows.iter().map(|row| row.number(&self.target))
    }
}

/// Serializes as an array of record objects in original column order, with
/// missing cells rendered as empty strings.
impl Serialize for Dataset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&RecordView {
                columns: &self.columns,
                row,
            })?;
        }
        seq.end()
    }
}

struct RecordView<'a> {
    columns: &'a [String],
    row: &'a Row,
}

impl Serialize for RecordView<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in self.columns {
            match self.row.cell(column) {
                Some(CellValue::Text(text)) => map.serialize_entry(column, text)?,
                Some(CellValue::Number(value)) => map.serialize_entry(column, value)?,
                Some(CellValue::Missing) | None => map.serialize_entry(column, "")?,
            }
        }
        map.end()
    }
}
