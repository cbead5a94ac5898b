//! Token normalization for monetary text

/// Characters stripped from numeric-looking tokens: thousands separators and
/// the currency symbol emitted by the upstream text recognizer
const STRIP_CHARS: [char; 2] = [',', '$'];

/// Normalize a document's token sequence for amount parsing.
///
/// Every token containing at least one digit has grouping separators and
/// currency symbols removed; tokens without any digit pass through unchanged.
/// The output has the same length and order as the input, and the operation
/// is idempotent.
///
/// `"1,234.56"` becomes `"1234.56"`, `"$0"` becomes `"0"`, while `"page1"`
/// and `"Total"` are untouched.
pub fn normalize_tokens(mut tokens: Vec<String>) -> Vec<String> {
    for token in tokens.iter_mut() {
        if token.chars().any(|c| c.is_ascii_digit()) {
            *token = token.chars().filter(|c| !STRIP_CHARS.contains(c)).collect();
        }
    }
    tokens
}
