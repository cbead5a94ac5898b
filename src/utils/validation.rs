//! Validation of user-supplied cashbook selectors

use crate::types::{VouchError, VouchResult};

/// Validate the reference-id column name supplied by the caller
pub fn validate_reference_column(name: &str) -> VouchResult<()> {
    if name.trim().is_empty() {
        return Err(VouchError::Format(
            "reference column name cannot be empty".to_string(),
        ));
    }
    if name.len() > 50 {
        return Err(VouchError::Format(
            "reference column name cannot exceed 50 characters".to_string(),
        ));
    }
    Ok(())
}

/// Validate an optional sheet-name selector
pub fn validate_sheet_name(name: &str) -> VouchResult<()> {
    if name.trim().is_empty() {
        return Err(VouchError::Format("sheet name cannot be empty".to_string()));
    }
    if name.len() > 50 {
        return Err(VouchError::Format(
            "sheet name cannot exceed 50 characters".to_string(),
        ));
    }
    Ok(())
}

/// Validate a spreadsheet column identifier such as `A` or `AF`.
///
/// Identifiers are one to three letters, which covers any realistic
/// cashbook width.
pub fn validate_column_id(id: &str) -> VouchResult<()> {
    if id.is_empty() || id.len() > 3 {
        return Err(VouchError::Format(format!(
            "column identifier '{id}' must be one to three letters"
        )));
    }
    if !id.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(VouchError::Format(format!(
            "column identifier '{id}' must be alphabetic"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_column_limits() {
        assert!(validate_reference_column("Reference_ID").is_ok());
        assert!(validate_reference_column("").is_err());
        assert!(validate_reference_column("  ").is_err());
        assert!(validate_reference_column(&"x".repeat(51)).is_err());
    }

    #[test]
    fn sheet_name_limits() {
        assert!(validate_sheet_name("cashbook").is_ok());
        assert!(validate_sheet_name("").is_err());
        assert!(validate_sheet_name(&"s".repeat(51)).is_err());
    }

    #[test]
    fn column_id_limits() {
        assert!(validate_column_id("A").is_ok());
        assert!(validate_column_id("af").is_ok());
        assert!(validate_column_id("ABC").is_ok());
        assert!(validate_column_id("").is_err());
        assert!(validate_column_id("ABCD").is_err());
        assert!(validate_column_id("A1").is_err());
    }
}
