//! Cashbook ingestion: tabular input model, record building, amount-key
//! resolution

pub mod amount_key;
pub mod records;
pub mod table;

pub use amount_key::*;
pub use records::*;
pub use table::*;
