//! # Vouching Core
//!
//! The core engine of an audit vouching tool: extracts the stated total from
//! each invoice's recognized text and reconciles it against the cashbook
//! entry sharing the same reference id, producing a structured discrepancy
//! report.
//!
//! ## Features
//!
//! - **Total extraction**: keyword-anchored scan over normalized document
//!   tokens, rightmost `total`/`subtotal` wins
//! - **Cashbook ingestion**: sheet and column-range selection, full-row
//!   filtering, case-folded reference-id keying
//! - **Amount-column inference**: priority-ordered schema probe over the
//!   ledger table
//! - **Reconciliation**: exact decimal comparison per reference id, with
//!   per-id failures reported instead of aborting the pass
//! - **Source abstraction**: OCR and spreadsheet collaborators behind
//!   trait seams, with in-memory implementations for testing
//!
//! ## Quick Start
//!
//! ```rust
//! use vouching_core::{find_total, normalize_tokens};
//!
//! let tokens: Vec<String> = "Invoice INV001 Subtotal $45.00 Total $50.00"
//!     .split_whitespace()
//!     .map(str::to_string)
//!     .collect();
//!
//! let total = find_total(&normalize_tokens(tokens)).unwrap();
//! assert_eq!(total.raw, "50.00");
//! ```

pub mod cashbook;
pub mod extract;
pub mod reconciliation;
pub mod traits;
pub mod types;
pub mod utils;
pub mod vouching;

// Re-export commonly used types
pub use cashbook::*;
pub use extract::*;
pub use reconciliation::*;
pub use traits::*;
pub use types::*;
pub use vouching::*;
