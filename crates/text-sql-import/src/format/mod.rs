//! Per-job format configuration.
//!
//! One [`DataFormat`] is shared read-only across all rows of an import job.
//! It controls how date/time/timestamp text is parsed (chrono strftime
//! patterns), how numeric text is parsed (locale separators), and how binary
//! columns are encoded in the source.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Encoding of binary column values in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BinaryFormat {
    /// Hexadecimal pair encoding, two digits per byte.
    Hex,
    /// Standard-alphabet Base64 with padding.
    Base64,
}

/// A numeric literal failed to parse under the job's locale.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{text}` is not a valid {kind} literal")]
pub struct NumberParseError {
    /// The offending source text.
    pub text: String,
    /// "integer" or "number".
    pub kind: &'static str,
}

/// Locale rules for parsing numeric text.
///
/// Grouping separators are stripped before parsing; the decimal separator
/// marks the fractional part. Integer-only parsing ignores everything from
/// the decimal separator on, so `"3.9"` parses to `3` in the default locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Character separating the integer and fractional parts.
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    /// Optional digit-grouping character, stripped on parse.
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: Option<char>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: default_decimal_separator(),
            grouping_separator: default_grouping_separator(),
        }
    }
}

impl NumberFormat {
    /// Parse an integer literal, ignoring any fractional part.
    pub fn parse_integer(&self, text: &str) -> Result<i64, NumberParseError> {
        let cleaned = self.strip_grouping(text);

        // Integer-only: everything from the decimal separator on is ignored.
        let integral = match cleaned.find(self.decimal_separator) {
            Some(pos) => &cleaned[..pos],
            None => cleaned.as_str(),
        };

        integral.parse::<i64>().map_err(|_| NumberParseError {
            text: text.to_string(),
            kind: "integer",
        })
    }

    /// Parse a floating-point literal.
    pub fn parse_float(&self, text: &str) -> Result<f64, NumberParseError> {
        let mut cleaned = self.strip_grouping(text);
        if self.decimal_separator != '.' {
            cleaned = cleaned.replace(self.decimal_separator, ".");
        }

        // Reject forms f64::from_str tolerates but no SQL source emits.
        if cleaned.is_empty() || cleaned.eq_ignore_ascii_case("nan") || cleaned.ends_with('.') {
            return Err(NumberParseError {
                text: text.to_string(),
                kind: "number",
            });
        }

        cleaned.parse::<f64>().map_err(|_| NumberParseError {
            text: text.to_string(),
            kind: "number",
        })
    }

    fn strip_grouping(&self, text: &str) -> String {
        let trimmed = text.trim();
        match self.grouping_separator {
            Some(sep) => trimmed.chars().filter(|c| *c != sep).collect(),
            None => trimmed.to_string(),
        }
    }
}

fn default_decimal_separator() -> char {
    '.'
}

fn default_grouping_separator() -> Option<char> {
    Some(',')
}

/// Immutable per-job format settings.
///
/// All fields have defaults matching the canonical ISO-ish patterns, so a
/// job definition only has to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFormat {
    /// chrono pattern for DATE columns.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// chrono pattern for TIME columns.
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// chrono pattern for TIMESTAMP columns. When left at
    /// [`DataFormat::DEFAULT_TIMESTAMP_FORMAT`], timestamps are parsed with
    /// the canonical literal grammar instead, which preserves sub-millisecond
    /// digits.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Locale rules for numeric columns.
    #[serde(default)]
    pub number: NumberFormat,

    /// Encoding of binary column values.
    #[serde(default = "default_binary_format")]
    pub binary: BinaryFormat,
}

impl DataFormat {
    /// Default DATE pattern.
    pub const DEFAULT_DATE_FORMAT: &'static str = "%Y-%m-%d";

    /// Default TIME pattern.
    pub const DEFAULT_TIME_FORMAT: &'static str = "%H:%M:%S";

    /// Reserved TIMESTAMP pattern selecting the canonical literal grammar.
    pub const DEFAULT_TIMESTAMP_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    /// Whether the configured timestamp pattern is the reserved default.
    pub fn uses_default_timestamp_format(&self) -> bool {
        self.timestamp_format == Self::DEFAULT_TIMESTAMP_FORMAT
    }
}

impl Default for DataFormat {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            time_format: default_time_format(),
            timestamp_format: default_timestamp_format(),
            number: NumberFormat::default(),
            binary: default_binary_format(),
        }
    }
}

fn default_date_format() -> String {
    DataFormat::DEFAULT_DATE_FORMAT.to_string()
}

fn default_time_format() -> String {
    DataFormat::DEFAULT_TIME_FORMAT.to_string()
}

fn default_timestamp_format() -> String {
    DataFormat::DEFAULT_TIMESTAMP_FORMAT.to_string()
}

fn default_binary_format() -> BinaryFormat {
    BinaryFormat::Hex
}
