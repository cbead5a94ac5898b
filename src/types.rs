//! Core types and data structures for the vouching engine

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// A monetary value extracted from a document token.
///
/// Keeps both the decimal interpretation (for exact comparison) and the
/// original textual form (for display and reporting). Can only be built by
/// parsing, so every `MoneyAmount` is guaranteed decimal-valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyAmount {
    /// Exact decimal value of the amount
    pub value: BigDecimal,
    /// Original token text the value was parsed from
    pub raw: String,
}

impl MoneyAmount {
    /// Parse a token into a money amount.
    ///
    /// Returns `None` when the token is not a finite decimal number.
    /// Exponent notation is accepted; `inf`/`nan` spellings are not money.
    pub fn parse(raw: &str) -> Option<Self> {
        let value = BigDecimal::from_str(raw).ok()?;
        Some(Self {
            value,
            raw: raw.to_string(),
        })
    }
}

/// One cashbook row, keyed by lowercase column name.
///
/// The reference-id column is never stored here; it is extracted out as the
/// owning [`LedgerTable`] key when the record is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    fields: HashMap<String, String>,
}

impl LedgerRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a column value, case-folding the column name
    pub fn insert(&mut self, column: &str, value: String) {
        self.fields.insert(column.to_lowercase(), value);
    }

    /// Get a column value by case-insensitive column name
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(&column.to_lowercase()).map(String::as_str)
    }

    /// Check whether a column is present
    pub fn contains_column(&self, column: &str) -> bool {
        self.fields.contains_key(&column.to_lowercase())
    }

    /// Iterate over the lowercase column names of this record
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of columns in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no columns
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The cashbook as a whole: lowercase reference id → [`LedgerRecord`].
///
/// Built once per run and read-only afterwards. Inserting a duplicate
/// reference id overwrites the earlier record (last row wins).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerTable {
    records: HashMap<String, LedgerRecord>,
}

impl LedgerTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under a reference id, case-folding the id
    pub fn insert(&mut self, reference_id: &str, record: LedgerRecord) {
        self.records.insert(reference_id.to_lowercase(), record);
    }

    /// Look up a record by case-insensitive reference id
    pub fn get(&self, reference_id: &str) -> Option<&LedgerRecord> {
        self.records.get(&reference_id.to_lowercase())
    }

    /// Iterate over `(reference id, record)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LedgerRecord)> {
        self.records.iter().map(|(id, rec)| (id.as_str(), rec))
    }

    /// Number of records in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Totals extracted from documents: lowercase reference id → [`MoneyAmount`].
///
/// One entry per successfully processed document; read-only once the
/// extraction pass completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    totals: HashMap<String, MoneyAmount>,
}

impl InvoiceTotals {
    /// Create an empty totals map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a total under a reference id, case-folding the id
    pub fn insert(&mut self, reference_id: &str, total: MoneyAmount) {
        self.totals.insert(reference_id.to_lowercase(), total);
    }

    /// Look up a total by case-insensitive reference id
    pub fn get(&self, reference_id: &str) -> Option<&MoneyAmount> {
        self.totals.get(&reference_id.to_lowercase())
    }

    /// Number of extracted totals
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Whether no totals were extracted
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// A reference id where the cashbook and the invoice disagree.
///
/// Both sides keep their original textual form for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discrepancy {
    /// Amount recorded in the cashbook, as written
    pub ledger_amount: String,
    /// Total extracted from the invoice, as written
    pub invoice_amount: String,
}

/// A per-reference-id reconciliation failure, distinct from a discrepancy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordFailure {
    /// The cashbook references an id with no extracted invoice total
    MissingInvoiceRecord,
    /// The record has no value under the resolved amount column
    MissingAmountField { field: String },
    /// The cashbook amount is not a parseable decimal
    InvalidLedgerAmount { raw: String },
}

/// Terminal artifact of a reconciliation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// When the report was produced
    pub generated_at: NaiveDateTime,
    /// Reference ids whose amounts differ numerically
    pub discrepancies: HashMap<String, Discrepancy>,
    /// Reference ids that could not be reconciled at all
    pub failures: HashMap<String, RecordFailure>,
}

impl ReconciliationReport {
    /// Create an empty report stamped with the current time
    pub fn new() -> Self {
        Self {
            generated_at: chrono::Utc::now().naive_utc(),
            discrepancies: HashMap::new(),
            failures: HashMap::new(),
        }
    }

    /// Whether every reference id reconciled cleanly
    pub fn is_clean(&self) -> bool {
        self.discrepancies.is_empty() && self.failures.is_empty()
    }
}

impl Default for ReconciliationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur in the vouching engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VouchError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),
    #[error("Total keyword not found")]
    TotalKeywordNotFound,
    #[error("Total amount not found")]
    TotalAmountNotFound,
    #[error("Invalid cashbook format: {0}")]
    Format(String),
    #[error("No invoice record for reference id '{0}'")]
    MissingInvoiceRecord(String),
    #[error("Source error: {0}")]
    Source(String),
}

/// Result type for vouching operations
pub type VouchResult<T> = Result<T, VouchError>;
