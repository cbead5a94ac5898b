//! Integration tests for vouching-core

use vouching_core::{
    utils::{MemoryCashbook, MemoryDocuments},
    Auditor, CashbookSpec, Cell, Discrepancy, FailurePolicy, RecordFailure, Sheet, VouchError,
    Workbook,
};

fn tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn sample_documents() -> MemoryDocuments {
    let mut documents = MemoryDocuments::new();
    documents.add_document("INV001.pdf", tokens("Invoice INV001 Total $50.00"));
    documents.add_document("inv002.jpg", tokens("Subtotal 70.00 Total 75.25"));
    documents.add_document("INV003.png", tokens("Item 100.00 Total due 120.00"));
    documents
}

fn sample_cashbook() -> MemoryCashbook {
    let sheet = Sheet::new(
        "cashbook",
        columns(&["Reference_ID", "Date", "Cash"]),
        vec![
            vec![
                Cell::text("INV001"),
                Cell::text("2024-01-05"),
                Cell::text("50.00"),
            ],
            vec![
                Cell::text("INV002"),
                Cell::text("2024-01-09"),
                Cell::text("80.00"),
            ],
            vec![
                Cell::text("INV003"),
                Cell::text("2024-01-12"),
                Cell::text("120.00"),
            ],
        ],
    );
    MemoryCashbook::new(Workbook::single(sheet))
}

#[tokio::test]
async fn end_to_end_vouching_reports_only_the_mismatched_id() {
    let auditor = Auditor::new(sample_documents(), sample_cashbook());
    let spec = CashbookSpec::new("Reference_ID").with_sheet("cashbook");

    let outcome = auditor.vouch(&spec).await.unwrap();

    assert_eq!(outcome.amount_key, "cash");
    assert_eq!(outcome.extraction.totals.len(), 3);
    assert!(outcome.extraction.failures.is_empty());

    assert_eq!(outcome.report.discrepancies.len(), 1);
    assert_eq!(
        outcome.report.discrepancies.get("inv002"),
        Some(&Discrepancy {
            ledger_amount: "80.00".to_string(),
            invoice_amount: "75.25".to_string(),
        })
    );
    assert!(outcome.report.failures.is_empty());
}

#[tokio::test]
async fn failed_documents_surface_as_per_id_entries_without_stopping_the_run() {
    let mut documents = sample_documents();
    documents.add_document("INV004.pdf", tokens("no keyword anywhere"));
    documents.add_document("notes.txt", tokens("Total 1.00"));

    let auditor = Auditor::new(documents, sample_cashbook());
    let spec = CashbookSpec::new("Reference_ID");

    let outcome = auditor.vouch(&spec).await.unwrap();

    // the three good documents still reconcile
    assert_eq!(outcome.extraction.totals.len(), 3);
    assert_eq!(outcome.report.discrepancies.len(), 1);

    assert_eq!(
        outcome.extraction.failures.get("inv004"),
        Some(&VouchError::TotalKeywordNotFound)
    );
    assert_eq!(
        outcome.extraction.failures.get("notes"),
        Some(&VouchError::UnsupportedFormat("notes.txt".to_string()))
    );
}

#[tokio::test]
async fn cashbook_row_without_a_document_is_a_reconciliation_failure() {
    let sheet = Sheet::new(
        "cashbook",
        columns(&["Reference_ID", "Cash"]),
        vec![
            vec![Cell::text("INV001"), Cell::text("50.00")],
            vec![Cell::text("INV009"), Cell::text("10.00")],
        ],
    );
    let auditor = Auditor::new(
        sample_documents(),
        MemoryCashbook::new(Workbook::single(sheet)),
    );

    let outcome = auditor.vouch(&CashbookSpec::new("Reference_ID")).await.unwrap();

    assert_eq!(
        outcome.report.failures.get("inv009"),
        Some(&RecordFailure::MissingInvoiceRecord)
    );
    // inv001 matched, so it appears nowhere in the report
    assert!(!outcome.report.discrepancies.contains_key("inv001"));
    assert!(!outcome.report.failures.contains_key("inv001"));
}

#[tokio::test]
async fn an_unreadable_cashbook_is_fatal_to_the_run() {
    let auditor = Auditor::new(sample_documents(), MemoryCashbook::default());
    let result = auditor.vouch(&CashbookSpec::new("Reference_ID")).await;
    assert!(matches!(result, Err(VouchError::Format(_))));
}

#[tokio::test]
async fn abort_policy_fails_the_whole_run_on_one_bad_document() {
    let mut documents = MemoryDocuments::new();
    documents.add_document("INV004.pdf", tokens("no keyword anywhere"));
    documents.add_document("INV001.pdf", tokens("Invoice Total 50.00"));

    let auditor = Auditor::with_policy(
        documents,
        sample_cashbook(),
        FailurePolicy::AbortOnFirstError,
    );
    let result = auditor.vouch(&CashbookSpec::new("Reference_ID")).await;
    assert_eq!(result, Err(VouchError::TotalKeywordNotFound));
}

#[tokio::test]
async fn report_serializes_to_a_nested_key_value_structure() {
    let auditor = Auditor::new(sample_documents(), sample_cashbook());
    let outcome = auditor.vouch(&CashbookSpec::new("Reference_ID")).await.unwrap();

    let json = serde_json::to_value(&outcome.report).unwrap();
    assert_eq!(json["discrepancies"]["inv002"]["ledger_amount"], "80.00");
    assert_eq!(json["discrepancies"]["inv002"]["invoice_amount"], "75.25");
}

#[tokio::test]
async fn column_range_restricts_which_cells_matter() {
    // the Notes column has a blank cell but sits outside the selected range
    let sheet = Sheet::new(
        "cashbook",
        columns(&["Reference_ID", "Cash", "Notes"]),
        vec![
            vec![Cell::text("INV001"), Cell::text("50.00"), Cell::Empty],
            vec![Cell::text("INV002"), Cell::text("80.00"), Cell::text("ok")],
            vec![Cell::text("INV003"), Cell::text("120.00"), Cell::Empty],
        ],
    );
    let auditor = Auditor::new(
        sample_documents(),
        MemoryCashbook::new(Workbook::single(sheet)),
    );
    let spec = CashbookSpec::new("Reference_ID").with_columns("A", "B");

    let outcome = auditor.vouch(&spec).await.unwrap();
    assert_eq!(outcome.report.discrepancies.len(), 1);
    assert!(outcome.report.failures.is_empty());
}
