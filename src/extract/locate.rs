//! Keyword-anchored total location in a token sequence

use crate::types::{MoneyAmount, VouchError, VouchResult};

/// Anchor keywords recognized as introducing a total amount
const TOTAL_KEYWORDS: [&str; 2] = ["total", "subtotal"];

/// Locate the total amount in a normalized token sequence.
///
/// The sequence is scanned for tokens exactly equal (case-insensitively) to
/// `total` or `subtotal`; the anchor is the position after the *last* match,
/// so a grand total printed below a subtotal wins. The first token at or
/// after the anchor that parses as a decimal number is the total, with its
/// textual form preserved.
///
/// Fails with [`VouchError::TotalKeywordNotFound`] when no keyword occurs, or
/// when the only match is the very first token (an invoice cannot open with
/// its own total line). Fails with [`VouchError::TotalAmountNotFound`] when
/// no parseable amount follows the anchor.
pub fn find_total(tokens: &[String]) -> VouchResult<MoneyAmount> {
    let mut anchor = 0;
    for (idx, word) in tokens.iter().enumerate() {
        if TOTAL_KEYWORDS.contains(&word.to_lowercase().as_str()) {
            anchor = idx + 1;
        }
    }
    if anchor <= 1 {
        return Err(VouchError::TotalKeywordNotFound);
    }
    for token in &tokens[anchor..] {
        if let Some(amount) = MoneyAmount::parse(token) {
            return Ok(amount);
        }
    }
    Err(VouchError::TotalAmountNotFound)
}
