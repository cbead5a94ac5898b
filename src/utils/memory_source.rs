//! In-memory source implementations for testing

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::cashbook::Workbook;
use crate::traits::*;
use crate::types::*;

/// In-memory document source for testing and development.
///
/// Holds already-recognized token sequences keyed by document name,
/// preserving insertion order for deterministic batch runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocuments {
    documents: Arc<RwLock<Vec<(String, Vec<String>)>>>,
}

impl MemoryDocuments {
    /// Create an empty document source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document with its recognized token sequence
    pub fn add_document(&mut self, name: impl Into<String>, tokens: Vec<String>) {
        self.documents.write().unwrap().push((name.into(), tokens));
    }
}

#[async_trait]
impl DocumentSource for MemoryDocuments {
    async fn list_documents(&self) -> VouchResult<Vec<String>> {
        Ok(self
            .documents
            .read()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect())
    }

    async fn read_tokens(&self, name: &str) -> VouchResult<Vec<String>> {
        self.documents
            .read()
            .unwrap()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, tokens)| tokens.clone())
            .ok_or_else(|| VouchError::Source(format!("unknown document '{name}'")))
    }
}

/// In-memory cashbook source for testing and development
#[derive(Debug, Clone, Default)]
pub struct MemoryCashbook {
    workbook: Arc<RwLock<Workbook>>,
}

impl MemoryCashbook {
    /// Create a cashbook source serving the given workbook
    pub fn new(workbook: Workbook) -> Self {
        Self {
            workbook: Arc::new(RwLock::new(workbook)),
        }
    }
}

#[async_trait]
impl CashbookSource for MemoryCashbook {
    async fn load_workbook(&self) -> VouchResult<Workbook> {
        Ok(self.workbook.read().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cashbook::Sheet;

    #[tokio::test]
    async fn documents_are_listed_in_insertion_order() {
        let mut source = MemoryDocuments::new();
        source.add_document("b.pdf", vec!["x".to_string()]);
        source.add_document("a.pdf", vec!["y".to_string()]);

        let names = source.list_documents().await.unwrap();
        assert_eq!(names, vec!["b.pdf".to_string(), "a.pdf".to_string()]);
        assert_eq!(source.read_tokens("a.pdf").await.unwrap(), vec!["y".to_string()]);
    }

    #[tokio::test]
    async fn reading_an_unknown_document_fails() {
        let source = MemoryDocuments::new();
        assert!(matches!(
            source.read_tokens("missing.pdf").await,
            Err(VouchError::Source(_))
        ));
    }

    #[tokio::test]
    async fn cashbook_serves_its_workbook() {
        let workbook = Workbook::single(Sheet::new("cashbook", vec![], vec![]));
        let source = MemoryCashbook::new(workbook.clone());
        assert_eq!(source.load_workbook().await.unwrap(), workbook);
    }
}
