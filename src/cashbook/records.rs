//! Building per-reference ledger records from the cashbook workbook

use serde::{Deserialize, Serialize};

use crate::cashbook::table::{column_index, Workbook};
use crate::types::{LedgerRecord, LedgerTable, VouchError, VouchResult};
use crate::utils::validation::{validate_column_id, validate_reference_column, validate_sheet_name};

/// How to read the cashbook: which column carries the reference id, and the
/// optional sheet and column-range selectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashbookSpec {
    /// Name of the column holding transaction reference ids
    pub reference_id_column: String,
    /// Sheet to read; the first sheet when omitted
    pub sheet_name: Option<String>,
    /// First column of the range to read, as a spreadsheet identifier
    pub start_column: Option<String>,
    /// Last column of the range to read, inclusive
    pub end_column: Option<String>,
}

impl CashbookSpec {
    /// Read every column of the given sheet (or of the first sheet)
    pub fn new(reference_id_column: impl Into<String>) -> Self {
        Self {
            reference_id_column: reference_id_column.into(),
            sheet_name: None,
            start_column: None,
            end_column: None,
        }
    }

    /// Restrict reading to a named sheet
    pub fn with_sheet(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = Some(sheet_name.into());
        self
    }

    /// Restrict reading to an inclusive column range
    pub fn with_columns(
        mut self,
        start_column: impl Into<String>,
        end_column: impl Into<String>,
    ) -> Self {
        self.start_column = Some(start_column.into());
        self.end_column = Some(end_column.into());
        self
    }

    /// Validate field shapes and the both-or-neither column-bound rule
    pub fn validate(&self) -> VouchResult<()> {
        validate_reference_column(&self.reference_id_column)?;
        if let Some(ref sheet_name) = self.sheet_name {
            validate_sheet_name(sheet_name)?;
        }
        match (&self.start_column, &self.end_column) {
            (Some(start), Some(end)) => {
                validate_column_id(start)?;
                validate_column_id(end)?;
                Ok(())
            }
            (None, None) => Ok(()),
            _ => Err(VouchError::Format(
                "start and end columns must be given together".to_string(),
            )),
        }
    }

    /// Resolve the column bounds to zero-based indices, when given
    fn column_bounds(&self) -> VouchResult<Option<(usize, usize)>> {
        match (&self.start_column, &self.end_column) {
            (Some(start), Some(end)) => {
                let start = column_index(start)?;
                let end = column_index(end)?;
                if start > end {
                    return Err(VouchError::Format(
                        "start column is after end column".to_string(),
                    ));
                }
                Ok(Some((start, end)))
            }
            _ => Ok(None),
        }
    }
}

/// Build the [`LedgerTable`] from a cashbook workbook.
///
/// The selected sheet is reduced to the configured column range, rows with
/// any blank cell in that range are dropped entirely, and each surviving row
/// becomes one record keyed by its lowercased reference id. The reference
/// column itself is not stored in the record. When two rows share a
/// reference id the later row wins.
pub fn build_ledger_table(workbook: &Workbook, spec: &CashbookSpec) -> VouchResult<LedgerTable> {
    spec.validate()?;
    let sheet = workbook.sheet(spec.sheet_name.as_deref())?;
    let width = sheet.columns.len();

    let selected: Vec<usize> = match spec.column_bounds()? {
        Some((start, end)) => {
            if end >= width {
                return Err(VouchError::Format(format!(
                    "column range ends at index {end} but sheet '{}' has {width} columns",
                    sheet.name
                )));
            }
            (start..=end).collect()
        }
        None => (0..width).collect(),
    };

    let reference_pos = selected
        .iter()
        .copied()
        .find(|&i| sheet.columns[i].eq_ignore_ascii_case(&spec.reference_id_column))
        .ok_or_else(|| {
            VouchError::Format(format!(
                "reference column '{}' not in the selected range",
                spec.reference_id_column
            ))
        })?;

    let mut table = LedgerTable::new();
    let mut dropped = 0usize;
    for (row_idx, row) in sheet.rows.iter().enumerate() {
        if row.len() != width {
            return Err(VouchError::Format(format!(
                "row {} has {} cells, expected {}",
                row_idx + 1,
                row.len(),
                width
            )));
        }
        // a row is usable only when fully populated across the selection
        if selected.iter().any(|&i| row[i].is_blank()) {
            dropped += 1;
            continue;
        }
        let reference_id = row[reference_pos].display_value().to_lowercase();
        let mut record = LedgerRecord::new();
        for &i in &selected {
            if i != reference_pos {
                record.insert(&sheet.columns[i], row[i].display_value());
            }
        }
        table.insert(&reference_id, record);
    }
    if dropped > 0 {
        tracing::debug!(dropped, "dropped partially populated cashbook rows");
    }
    Ok(table)
}
