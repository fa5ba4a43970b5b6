//! Identifier validation and quoting.
//!
//! Table and column names cannot be bound as statement parameters, so the
//! insert text has to interpolate them. Every identifier is validated for
//! suspicious patterns and wrapped in the destination's reported quote
//! string, with embedded quote sequences doubled.

use crate::error::{ImportError, Result};

/// Maximum identifier length (conservative limit across databases).
const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Validate an identifier before it is interpolated into SQL text.
///
/// Rejects empty identifiers, identifiers containing NUL bytes, and
/// identifiers exceeding the maximum length.
pub fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ImportError::Identifier(
            "identifier cannot be empty".to_string(),
        ));
    }

    if name.contains('\0') {
        return Err(ImportError::Identifier(format!(
            "identifier contains null byte: {:?}",
            name
        )));
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(ImportError::Identifier(format!(
            "identifier exceeds {} bytes (got {}): {:?}",
            MAX_IDENTIFIER_LENGTH,
            name.len(),
            name
        )));
    }

    Ok(())
}

/// Quote an identifier with the destination's reported quote string.
///
/// Occurrences of the quote string inside the identifier are doubled. Engines
/// that report no quoting support return a blank quote string, in which case
/// the identifier is validated and emitted bare.
///
/// # Examples
///
/// ```rust
/// use text_sql_import::statement::quote_identifier;
///
/// assert_eq!(quote_identifier("users", "\"").unwrap(), "\"users\"");
/// assert_eq!(quote_identifier("a\"b", "\"").unwrap(), "\"a\"\"b\"");
/// assert_eq!(quote_identifier("users", " ").unwrap(), "users");
/// ```
pub fn quote_identifier(name: &str, quote: &str) -> Result<String> {
    validate_identifier(name)?;

    let quote = quote.trim();
    if quote.is_empty() {
        return Ok(name.to_string());
    }

    let doubled = format!("{quote}{quote}");
    Ok(format!(
        "{quote}{}{quote}",
        name.replace(quote, &doubled)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty() {
        assert!(validate_identifier("").is_err());
    }

    #[test]
    fn test_validate_rejects_null_byte() {
        assert!(validate_identifier("a\0b").is_err());
    }

    #[test]
    fn test_validate_rejects_overlong() {
        let long = "x".repeat(129);
        assert!(validate_identifier(&long).is_err());
        let max = "x".repeat(128);
        assert!(validate_identifier(&max).is_ok());
    }

    #[test]
    fn test_quote_double_quote() {
        assert_eq!(quote_identifier("users", "\"").unwrap(), "\"users\"");
    }

    #[test]
    fn test_quote_backtick() {
        assert_eq!(quote_identifier("users", "`").unwrap(), "`users`");
    }

    #[test]
    fn test_quote_escapes_embedded() {
        assert_eq!(quote_identifier("ta\"ble", "\"").unwrap(), "\"ta\"\"ble\"");
        assert_eq!(quote_identifier("ta`ble", "`").unwrap(), "`ta``ble`");
    }

    #[test]
    fn test_blank_quote_emits_bare() {
        // JDBC-style metadata reports a single space when quoting is
        // unsupported.
        assert_eq!(quote_identifier("users", " ").unwrap(), "users");
        assert_eq!(quote_identifier("users", "").unwrap(), "users");
    }
}
