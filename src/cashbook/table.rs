//! Tabular input model for the cashbook boundary

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::{VouchError, VouchResult};

/// One spreadsheet cell, as delivered by the spreadsheet-reading collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// A cell the reader could not populate
    Empty,
    /// A textual cell
    Text(String),
    /// A numeric cell
    Number(BigDecimal),
}

impl Cell {
    /// Convenience constructor for textual cells
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Convenience constructor for numeric cells
    pub fn number(value: BigDecimal) -> Self {
        Cell::Number(value)
    }

    /// Whether the cell counts as unpopulated for the full-row filter.
    ///
    /// Whitespace-only text is blank: an auditor cannot reconcile against it.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// String form of the cell value, as stored in a ledger record
    pub fn display_value(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

/// A named sheet: ordered columns and ordered rows of cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// Sheet name, as the workbook names it
    pub name: String,
    /// Column names, in sheet order
    pub columns: Vec<String>,
    /// Rows of cells; each row must be as wide as `columns`
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Create a sheet from its parts
    pub fn new(name: impl Into<String>, columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }
}

/// The cashbook file as a set of named sheets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    /// Sheets in workbook order
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Create a workbook from its sheets
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Create a workbook holding a single sheet
    pub fn single(sheet: Sheet) -> Self {
        Self {
            sheets: vec![sheet],
        }
    }

    /// Select a sheet by name, or the first sheet when no name is given.
    ///
    /// Fails with [`VouchError::Format`] when the workbook is empty or the
    /// named sheet does not exist.
    pub fn sheet(&self, name: Option<&str>) -> VouchResult<&Sheet> {
        match name {
            Some(name) => self
                .sheets
                .iter()
                .find(|s| s.name == name)
                .ok_or_else(|| VouchError::Format(format!("no sheet named '{name}'"))),
            None => self
                .sheets
                .first()
                .ok_or_else(|| VouchError::Format("workbook has no sheets".to_string())),
        }
    }
}

/// Convert a spreadsheet-style column identifier to a zero-based index.
///
/// Uses the bijective base-26 scheme spreadsheets use: `A` is 0, `Z` is 25,
/// `AA` is 26. Fails with [`VouchError::Format`] on empty or non-alphabetic
/// identifiers.
pub fn column_index(id: &str) -> VouchResult<usize> {
    if id.is_empty() {
        return Err(VouchError::Format("empty column identifier".to_string()));
    }
    let mut index = 0usize;
    for c in id.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(VouchError::Format(format!("invalid column identifier '{id}'")));
        }
        let digit = c.to_ascii_uppercase() as usize - 'A' as usize + 1;
        index = index * 26 + digit;
    }
    Ok(index - 1)
}
