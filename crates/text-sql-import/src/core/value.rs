//! Typed parameter values bound against the insert statement.

use std::borrow::Cow;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use super::lob::LobHandle;
use super::types::TypeCode;

/// A converted parameter value, ready for binding.
///
/// Uses `Cow` for character and binary data so conversion can borrow directly
/// from the raw row buffer; the value never outlives the row it was bound
/// for. NULLs carry the target [`TypeCode`] so the execution primitive can
/// bind a correctly typed NULL.
///
/// # Example
///
/// ```rust
/// use std::borrow::Cow;
/// use text_sql_import::SqlValue;
///
/// // Zero-copy from the raw row
/// let borrowed: SqlValue<'_> = SqlValue::Text(Cow::Borrowed("hello"));
///
/// // Detach from the row buffer
/// let owned: SqlValue<'static> = borrowed.into_owned();
/// ```
#[derive(Debug, Clone)]
pub enum SqlValue<'a> {
    /// NULL for the given target type.
    Null(TypeCode),

    /// Character data (CHAR/VARCHAR/LONGVARCHAR).
    Text(Cow<'a, str>),

    /// National character data (NCHAR/NVARCHAR/LONGNVARCHAR).
    NText(Cow<'a, str>),

    /// Arbitrary-precision decimal (NUMERIC/DECIMAL).
    Decimal(Decimal),

    /// Boolean (BIT/BOOLEAN).
    Bool(bool),

    /// 32-bit signed integer (TINYINT/SMALLINT/INTEGER all bind as int).
    I32(i32),

    /// 64-bit signed integer (BIGINT).
    I64(i64),

    /// 32-bit floating point (REAL).
    F32(f32),

    /// 64-bit floating point (FLOAT/DOUBLE).
    F64(f64),

    /// Binary data (BINARY/VARBINARY/LONGVARBINARY).
    Bytes(Cow<'a, [u8]>),

    /// Date without time component.
    Date(NaiveDate),

    /// Time without date component.
    Time(NaiveTime),

    /// Timestamp without timezone.
    Timestamp(NaiveDateTime),

    /// Character large object bound through a scoped handle.
    Clob(Arc<LobHandle>),

    /// National character large object bound through a scoped handle.
    NClob(Arc<LobHandle>),

    /// Binary large object bound through a scoped handle.
    Blob(Arc<LobHandle>),

    /// XML value wrapping the source text verbatim.
    Xml(Cow<'a, str>),
}

impl<'a> SqlValue<'a> {
    /// Convert to a fully owned value with `'static` lifetime.
    #[must_use]
    pub fn into_owned(self) -> SqlValue<'static> {
        match self {
            SqlValue::Null(t) => SqlValue::Null(t),
            SqlValue::Text(v) => SqlValue::Text(Cow::Owned(v.into_owned())),
            SqlValue::NText(v) => SqlValue::NText(Cow::Owned(v.into_owned())),
            SqlValue::Decimal(v) => SqlValue::Decimal(v),
            SqlValue::Bool(v) => SqlValue::Bool(v),
            SqlValue::I32(v) => SqlValue::I32(v),
            SqlValue::I64(v) => SqlValue::I64(v),
            SqlValue::F32(v) => SqlValue::F32(v),
            SqlValue::F64(v) => SqlValue::F64(v),
            SqlValue::Bytes(v) => SqlValue::Bytes(Cow::Owned(v.into_owned())),
            SqlValue::Date(v) => SqlValue::Date(v),
            SqlValue::Time(v) => SqlValue::Time(v),
            SqlValue::Timestamp(v) => SqlValue::Timestamp(v),
            SqlValue::Clob(v) => SqlValue::Clob(v),
            SqlValue::NClob(v) => SqlValue::NClob(v),
            SqlValue::Blob(v) => SqlValue::Blob(v),
            SqlValue::Xml(v) => SqlValue::Xml(Cow::Owned(v.into_owned())),
        }
    }

    /// Check if this value is NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null(_))
    }

    /// The scoped large-object handle behind this value, if any.
    #[must_use]
    pub fn lob(&self) -> Option<&Arc<LobHandle>> {
        match self {
            SqlValue::Clob(h) | SqlValue::NClob(h) | SqlValue::Blob(h) => Some(h),
            _ => None,
        }
    }
}

impl From<i32> for SqlValue<'static> {
    fn from(v: i32) -> Self {
        SqlValue::I32(v)
    }
}

impl<'a> From<&'a str> for SqlValue<'a> {
    fn from(v: &'a str) -> Self {
        SqlValue::Text(Cow::Borrowed(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_owned() {
        let borrowed: SqlValue<'_> = SqlValue::Text(Cow::Borrowed("hello"));
        let owned: SqlValue<'static> = borrowed.into_owned();
        match owned {
            SqlValue::Text(Cow::Owned(s)) => assert_eq!(s, "hello"),
            other => panic!("expected owned text, got {:?}", other),
        }
    }

    #[test]
    fn test_is_null() {
        assert!(SqlValue::Null(TypeCode::Varchar).is_null());
        assert!(!SqlValue::I32(42).is_null());
    }

    #[test]
    fn test_lob_accessor() {
        let handle = LobHandle::clob("body");
        let value = SqlValue::Clob(Arc::clone(&handle));
        assert!(value.lob().is_some());
        assert!(SqlValue::I64(1).lob().is_none());
    }

    #[test]
    fn test_from_implementations() {
        let v: SqlValue<'static> = 42i32.into();
        assert!(matches!(v, SqlValue::I32(42)));

        let v: SqlValue<'_> = "hello".into();
        assert!(matches!(v, SqlValue::Text(Cow::Borrowed("hello"))));
    }
}
