//! Text-to-typed-parameter conversion.
//!
//! [`convert`] maps one raw text value plus a target [`TypeCode`] and the
//! job's [`DataFormat`] to a [`SqlValue`], or to a [`ConvertError`] when the
//! text is malformed for the target type.

use std::borrow::Cow;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::core::lob::LobHandle;
use crate::core::types::TypeCode;
use crate::core::value::SqlValue;
use crate::error::ConvertError;
use crate::format::{BinaryFormat, DataFormat};
use crate::import::InsertContext;

/// Timestamp grammar used when the job keeps the default timestamp pattern.
/// Accepts an optional fractional-second part down to nanoseconds, so
/// sub-millisecond digits in canonical literals survive conversion.
const CANONICAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Convert one raw text value to a typed parameter for the given target type.
///
/// - `None` becomes a typed SQL NULL for every target, with no inspection.
/// - Large-object targets (`Clob`, `NClob`, `Blob`) allocate a scoped
///   [`LobHandle`] registered with `ctx` for release after the current row.
/// - [`TypeCode::Other`] is the one arm that yields
///   [`ConvertError::UnsupportedType`].
///
/// Reusable outside batch import for single-value conversion; only the
/// context's format configuration and large-object registry are touched.
pub fn convert<'a>(
    ctx: &mut InsertContext,
    type_code: TypeCode,
    raw: Option<&'a str>,
) -> Result<SqlValue<'a>, ConvertError> {
    let Some(text) = raw else {
        return Ok(SqlValue::Null(type_code));
    };

    let format = ctx.format_shared();

    match type_code {
        TypeCode::Char | TypeCode::Varchar | TypeCode::LongVarchar => {
            Ok(SqlValue::Text(Cow::Borrowed(text)))
        }

        TypeCode::NChar | TypeCode::NVarchar | TypeCode::LongNVarchar => {
            Ok(SqlValue::NText(Cow::Borrowed(text)))
        }

        TypeCode::Numeric | TypeCode::Decimal => {
            let value = Decimal::from_str_exact(text).or_else(|_| text.parse::<Decimal>())?;
            Ok(SqlValue::Decimal(value))
        }

        TypeCode::Bit | TypeCode::Boolean => Ok(SqlValue::Bool(parse_boolean(text))),

        TypeCode::TinyInt | TypeCode::SmallInt | TypeCode::Integer => {
            let wide = format.number.parse_integer(text)?;
            let value = i32::try_from(wide).map_err(|_| ConvertError::IntRange(32))?;
            Ok(SqlValue::I32(value))
        }

        TypeCode::BigInt => Ok(SqlValue::I64(format.number.parse_integer(text)?)),

        TypeCode::Real => Ok(SqlValue::F32(format.number.parse_float(text)? as f32)),

        TypeCode::Float | TypeCode::Double => {
            Ok(SqlValue::F64(format.number.parse_float(text)?))
        }

        TypeCode::Binary | TypeCode::Varbinary | TypeCode::LongVarbinary => {
            match decode_binary(format.binary, text)? {
                Some(bytes) => Ok(SqlValue::Bytes(Cow::Owned(bytes))),
                // Empty source text binds NULL, not a zero-length payload.
                None => Ok(SqlValue::Null(type_code)),
            }
        }

        TypeCode::Blob => match decode_binary(format.binary, text)? {
            Some(bytes) => {
                let handle = LobHandle::blob(bytes);
                ctx.register_lob(Arc::clone(&handle));
                Ok(SqlValue::Blob(handle))
            }
            None => Ok(SqlValue::Null(type_code)),
        },

        TypeCode::Date => {
            let date = NaiveDate::parse_from_str(text, &format.date_format)?;
            Ok(SqlValue::Date(date))
        }

        TypeCode::Time => {
            let time = NaiveTime::parse_from_str(text, &format.time_format)?;
            Ok(SqlValue::Time(time))
        }

        TypeCode::Timestamp => Ok(SqlValue::Timestamp(parse_timestamp(&format, text)?)),

        TypeCode::Clob => {
            let handle = LobHandle::clob(text);
            ctx.register_lob(Arc::clone(&handle));
            Ok(SqlValue::Clob(handle))
        }

        TypeCode::NClob => {
            let handle = LobHandle::clob(text);
            ctx.register_lob(Arc::clone(&handle));
            Ok(SqlValue::NClob(handle))
        }

        TypeCode::Xml => Ok(SqlValue::Xml(Cow::Borrowed(text))),

        TypeCode::Other(_) => Err(ConvertError::UnsupportedType(type_code)),
    }
}

/// Lenient boolean rule: true iff the text equals `true`/`on`
/// case-insensitively or `1` exactly. Anything else, junk included, is false.
fn parse_boolean(text: &str) -> bool {
    text.eq_ignore_ascii_case("true") || text == "1" || text.eq_ignore_ascii_case("on")
}

/// Decode a binary payload per the configured encoding.
///
/// Empty input decodes to `None` ("no bytes"), never an error.
fn decode_binary(encoding: BinaryFormat, text: &str) -> Result<Option<Vec<u8>>, ConvertError> {
    if text.is_empty() {
        return Ok(None);
    }

    let bytes = match encoding {
        BinaryFormat::Hex => hex::decode(text)?,
        BinaryFormat::Base64 => BASE64_STANDARD.decode(text)?,
    };

    Ok(Some(bytes))
}

fn parse_timestamp(format: &DataFormat, text: &str) -> Result<NaiveDateTime, ConvertError> {
    if format.uses_default_timestamp_format() {
        // Canonical literal grammar keeps the full fractional precision.
        return Ok(NaiveDateTime::parse_from_str(
            text,
            CANONICAL_TIMESTAMP_FORMAT,
        )?);
    }

    let ts = NaiveDateTime::parse_from_str(text, &format.timestamp_format)?;
    Ok(truncate_to_millis(ts))
}

fn truncate_to_millis(ts: NaiveDateTime) -> NaiveDateTime {
    let nanos = ts.nanosecond() - ts.nanosecond() % 1_000_000;
    ts.with_nanosecond(nanos).unwrap_or(ts)
}
