//! Inference of the cashbook column holding transaction amounts

use crate::types::{LedgerTable, VouchError, VouchResult};

/// Column names recognized as carrying the transaction amount, most
/// specific first
pub const AMOUNT_KEY_PRIORITY: [&str; 5] = ["cash", "amount", "credit", "payments", "payment"];

/// Resolve which column of the ledger table holds transaction amounts.
///
/// One representative record is inspected and the first priority name
/// present in its column set wins; the decision is global for the whole
/// table. This assumes a uniform schema across records, which holds for any
/// table built by [`build_ledger_table`](crate::cashbook::build_ledger_table)
/// since partially populated rows are dropped rather than kept with gaps.
///
/// Fails with [`VouchError::TotalKeywordNotFound`] when no priority name is
/// present, or when the table is empty.
pub fn resolve_amount_key(table: &LedgerTable) -> VouchResult<&'static str> {
    let record = table
        .iter()
        .next()
        .map(|(_, record)| record)
        .ok_or(VouchError::TotalKeywordNotFound)?;
    AMOUNT_KEY_PRIORITY
        .iter()
        .copied()
        .find(|key| record.contains_column(key))
        .ok_or(VouchError::TotalKeywordNotFound)
}
