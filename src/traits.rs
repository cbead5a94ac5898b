//! Traits abstracting the external collaborators that feed the engine

use async_trait::async_trait;

use crate::cashbook::Workbook;
use crate::types::*;

/// Source of recognized document text.
///
/// Stands in for the upstream OCR / rasterization collaborators. The engine
/// only ever sees document names (from which reference ids are derived) and
/// ordered, whitespace-split token sequences; how the text was recognized is
/// the source's concern.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// List the names of all documents available for processing
    async fn list_documents(&self) -> VouchResult<Vec<String>>;

    /// Read the ordered token sequence of one document
    async fn read_tokens(&self, name: &str) -> VouchResult<Vec<String>>;
}

/// Source of the cashbook tabular dataset.
///
/// Stands in for the spreadsheet-reading collaborator. A source that cannot
/// produce a structured workbook fails with [`VouchError::Format`], which is
/// fatal to the run: no reconciliation can proceed without a ledger table.
#[async_trait]
pub trait CashbookSource: Send + Sync {
    /// Load the cashbook as a structured workbook
    async fn load_workbook(&self) -> VouchResult<Workbook>;
}
