//! Extraction of invoice totals from recognized document text

pub mod document;
pub mod locate;
pub mod normalize;

pub use document::*;
pub use locate::*;
pub use normalize::*;
