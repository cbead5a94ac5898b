//! Batch orchestrator: document extraction through reconciliation

use std::collections::HashMap;

use crate::cashbook::{build_ledger_table, resolve_amount_key, CashbookSpec};
use crate::extract::{classify_document, find_total, normalize_tokens, reference_id_from_name};
use crate::reconciliation::ReconciliationEngine;
use crate::traits::{CashbookSource, DocumentSource};
use crate::types::*;

/// How a run reacts to a per-document extraction failure.
///
/// Reconciliation failures are always per-id and never abort the pass; this
/// policy only governs the extraction stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure against the document's reference id and keep
    /// going, so one bad document never hides results for the rest
    #[default]
    ContinueOnError,
    /// Abort the whole run on the first failing document
    AbortOnFirstError,
}

/// Result of the extraction stage over a batch of documents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionOutcome {
    /// Totals for every successfully processed document
    pub totals: InvoiceTotals,
    /// Extraction errors, keyed by the failing document's reference id
    pub failures: HashMap<String, VouchError>,
}

/// Terminal result of a full vouching run
#[derive(Debug, Clone, PartialEq)]
pub struct VouchOutcome {
    /// What the extraction stage produced
    pub extraction: ExtractionOutcome,
    /// The cashbook column that was compared against invoice totals
    pub amount_key: String,
    /// The reconciliation report
    pub report: ReconciliationReport,
}

/// Coordinates a vouching run over a document source and a cashbook source.
///
/// The pipeline is fixed: extract a total per document, build the ledger
/// table, resolve the amount column, reconcile, report. Each stage is a pure
/// function of its inputs; the sources are only consulted for reads.
pub struct Auditor<D: DocumentSource, C: CashbookSource> {
    documents: D,
    cashbook: C,
    policy: FailurePolicy,
}

impl<D: DocumentSource, C: CashbookSource> Auditor<D, C> {
    /// Create an auditor with the default continue-on-error policy
    pub fn new(documents: D, cashbook: C) -> Self {
        Self {
            documents,
            cashbook,
            policy: FailurePolicy::default(),
        }
    }

    /// Create an auditor with an explicit failure policy
    pub fn with_policy(documents: D, cashbook: C, policy: FailurePolicy) -> Self {
        Self {
            documents,
            cashbook,
            policy,
        }
    }

    /// Extract one total per document, keyed by derived reference id.
    ///
    /// Under [`FailurePolicy::ContinueOnError`] a failing document is
    /// recorded in the outcome and the batch continues; under
    /// [`FailurePolicy::AbortOnFirstError`] the first failure ends the run.
    pub async fn extract_totals(&self) -> VouchResult<ExtractionOutcome> {
        let names = self.documents.list_documents().await?;
        let mut outcome = ExtractionOutcome::default();
        for name in names {
            let reference_id = reference_id_from_name(&name);
            match self.extract_one(&name).await {
                Ok(total) => outcome.totals.insert(&reference_id, total),
                Err(err) => match self.policy {
                    FailurePolicy::AbortOnFirstError => return Err(err),
                    FailurePolicy::ContinueOnError => {
                        tracing::warn!(document = %name, error = %err, "document skipped");
                        outcome.failures.insert(reference_id, err);
                    }
                },
            }
        }
        Ok(outcome)
    }

    /// Load the cashbook and build the ledger table.
    ///
    /// Failures here are run-fatal: without a valid ledger table no
    /// reconciliation can proceed.
    pub async fn load_ledger_table(&self, spec: &CashbookSpec) -> VouchResult<LedgerTable> {
        let workbook = self.cashbook.load_workbook().await?;
        build_ledger_table(&workbook, spec)
    }

    /// Run the full pipeline and produce the vouching outcome
    pub async fn vouch(&self, spec: &CashbookSpec) -> VouchResult<VouchOutcome> {
        let extraction = self.extract_totals().await?;
        let ledger = self.load_ledger_table(spec).await?;
        let amount_key = resolve_amount_key(&ledger)?;
        let report = ReconciliationEngine::new(amount_key).reconcile(&ledger, &extraction.totals);
        Ok(VouchOutcome {
            extraction,
            amount_key: amount_key.to_string(),
            report,
        })
    }

    async fn extract_one(&self, name: &str) -> VouchResult<MoneyAmount> {
        classify_document(name)?;
        let tokens = self.documents.read_tokens(name).await?;
        let tokens = normalize_tokens(tokens);
        find_total(&tokens)
    }
}
