//! Document identity: kind classification and reference-id derivation

use std::path::Path;

use crate::types::{VouchError, VouchResult};

/// Document categories the upstream recognizers can handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// A scanned page image, recognized directly
    Image,
    /// A paginated document, rasterized page by page before recognition
    Document,
}

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
const DOCUMENT_EXTENSIONS: [&str; 1] = ["pdf"];

/// Classify a document by its file name.
///
/// Fails with [`VouchError::UnsupportedFormat`] when the extension matches
/// no known document or image category.
pub fn classify_document(name: &str) -> VouchResult<DocumentKind> {
    let extension = Path::new(&name.to_lowercase())
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_string)
        .unwrap_or_default();
    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Ok(DocumentKind::Image)
    } else if DOCUMENT_EXTENSIONS.contains(&extension.as_str()) {
        Ok(DocumentKind::Document)
    } else {
        Err(VouchError::UnsupportedFormat(name.to_string()))
    }
}

/// Derive the reference id linking a document to its cashbook row.
///
/// The id is the file stem of the document name, case-folded, so
/// `INV001.pdf` and a cashbook row keyed `inv001` refer to the same
/// transaction.
pub fn reference_id_from_name(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
        .to_lowercase()
}
