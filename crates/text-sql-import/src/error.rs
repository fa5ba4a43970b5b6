//! Error types for the import core.

use thiserror::Error;

use crate::core::types::TypeCode;

/// Boxed error type for failures surfaced by external collaborators
/// (the SQL execution primitive, metadata provider, etc.).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Low-level value conversion failure.
///
/// Produced by [`crate::convert::convert`] when source text cannot be turned
/// into a typed parameter. Carries only the parse-level cause; the driver
/// wraps it with table/row/column context before it leaves the import.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Malformed arbitrary-precision decimal literal.
    #[error("malformed decimal literal")]
    Decimal(#[from] rust_decimal::Error),

    /// Malformed integer or floating-point literal under the job's locale.
    #[error(transparent)]
    Number(#[from] crate::format::NumberParseError),

    /// Integer literal out of range for the destination column width.
    #[error("integer literal out of range for a {0}-bit column")]
    IntRange(u8),

    /// Malformed hexadecimal binary payload (odd length, non-hex digit).
    #[error("malformed hex payload")]
    Hex(#[from] hex::FromHexError),

    /// Malformed Base64 binary payload.
    #[error("malformed base64 payload")]
    Base64(#[from] base64::DecodeError),

    /// Date/time/timestamp text does not match the configured pattern.
    #[error("unparseable date/time text")]
    Temporal(#[from] chrono::ParseError),

    /// The destination column's SQL type is not implemented by this core.
    #[error("sql type {0:?} is not supported for text import")]
    UnsupportedType(TypeCode),
}

/// Main error type for import operations.
#[derive(Error, Debug)]
pub enum ImportError {
    /// A requested column does not exist in the destination table.
    ///
    /// Structural: the job cannot make forward progress, so this aborts
    /// immediately even when row-level error tolerance is enabled.
    #[error("column {column} not found in table {table}")]
    ColumnNotFound { table: String, column: String },

    /// A destination column reported a SQL type this core does not implement.
    ///
    /// Structural, like [`ImportError::ColumnNotFound`]: always fatal to the
    /// job regardless of the abort-on-error setting.
    #[error("unsupported sql type {type_code:?} for column {column} (table {table}, row {row_index})")]
    UnsupportedType {
        table: String,
        row_index: usize,
        column: String,
        type_code: TypeCode,
    },

    /// Source text for one column could not be converted to the target type.
    #[error("cannot convert value for column {column} (table {table}, row {row_index})")]
    Conversion {
        table: String,
        row_index: usize,
        column: String,
        raw_value: Option<String>,
        #[source]
        source: ConvertError,
    },

    /// The destination rejected the insert (constraint violation, engine-side
    /// type mismatch, connection failure, ...).
    #[error("insert failed for table {table} at row {row_index}")]
    Execution {
        table: String,
        row_index: usize,
        #[source]
        source: BoxError,
    },

    /// The destination metadata provider failed to describe the table.
    #[error("cannot read column metadata for table {table}")]
    Metadata {
        table: String,
        #[source]
        source: BoxError,
    },

    /// An identifier was rejected before statement construction.
    #[error("invalid identifier: {0}")]
    Identifier(String),
}

impl ImportError {
    /// Format error with full details including the source chain.
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;
