//! Reconciliation of cashbook amounts against extracted invoice totals

use bigdecimal::BigDecimal;
use std::str::FromStr;

use crate::types::{
    Discrepancy, InvoiceTotals, LedgerTable, ReconciliationReport, RecordFailure,
};

/// Compares ledger amounts to extracted invoice totals per reference id.
///
/// Comparison is exact decimal equality after parsing; `100.00` and `100.0`
/// agree, `100.00` and `99.99` do not. There is no tolerance: the domain is
/// currency and exact agreement is the pass condition.
pub struct ReconciliationEngine {
    amount_key: String,
}

impl ReconciliationEngine {
    /// Create an engine using the resolved amount column
    pub fn new(amount_key: impl Into<String>) -> Self {
        Self {
            amount_key: amount_key.into(),
        }
    }

    /// Reconcile every reference id present in the ledger table.
    ///
    /// A failing id never aborts the pass: an id with no extracted invoice
    /// total, a record missing the amount column, or an unparseable cashbook
    /// amount is recorded as a failure entry and iteration continues.
    /// Numeric mismatches become discrepancy entries preserving both
    /// original textual amounts.
    pub fn reconcile(&self, ledger: &LedgerTable, invoices: &InvoiceTotals) -> ReconciliationReport {
        let mut report = ReconciliationReport::new();
        for (reference_id, record) in ledger.iter() {
            let Some(invoice_total) = invoices.get(reference_id) else {
                tracing::warn!(reference_id, "no invoice total for cashbook entry");
                report
                    .failures
                    .insert(reference_id.to_string(), RecordFailure::MissingInvoiceRecord);
                continue;
            };
            let Some(ledger_raw) = record.get(&self.amount_key) else {
                report.failures.insert(
                    reference_id.to_string(),
                    RecordFailure::MissingAmountField {
                        field: self.amount_key.clone(),
                    },
                );
                continue;
            };
            let Ok(ledger_value) = BigDecimal::from_str(ledger_raw) else {
                report.failures.insert(
                    reference_id.to_string(),
                    RecordFailure::InvalidLedgerAmount {
                        raw: ledger_raw.to_string(),
                    },
                );
                continue;
            };
            if ledger_value != invoice_total.value {
                report.discrepancies.insert(
                    reference_id.to_string(),
                    Discrepancy {
                        ledger_amount: ledger_raw.to_string(),
                        invoice_amount: invoice_total.raw.clone(),
                    },
                );
            }
        }
        tracing::info!(
            checked = ledger.len(),
            discrepancies = report.discrepancies.len(),
            failures = report.failures.len(),
            "reconciliation pass complete"
        );
        report
    }
}
