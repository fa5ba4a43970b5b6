//! Destination SQL type codes.

use serde::{Deserialize, Serialize};

/// Engine-reported SQL type code of a destination column.
///
/// This is a closed enumeration: every code the converter implements has its
/// own variant, and anything else the engine reports is carried verbatim in
/// [`TypeCode::Other`]. Matching on `TypeCode` is therefore exhaustive, and
/// the unsupported-type path is a single explicit arm rather than a default
/// branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeCode {
    // Character
    Char,
    Varchar,
    LongVarchar,
    NChar,
    NVarchar,
    LongNVarchar,

    // Exact numeric
    Numeric,
    Decimal,

    // Boolean-ish
    Bit,
    Boolean,

    // Integers
    TinyInt,
    SmallInt,
    Integer,
    BigInt,

    // Floating point
    Real,
    Float,
    Double,

    // Binary
    Binary,
    Varbinary,
    LongVarbinary,

    // Temporal
    Date,
    Time,
    Timestamp,

    // Large objects
    Clob,
    NClob,
    Blob,

    // XML
    Xml,

    /// Any engine code without a dedicated variant. Always unsupported by the
    /// converter.
    Other(i32),
}

impl TypeCode {
    /// Map a standard SQL/CLI integer type code to a `TypeCode`.
    ///
    /// Unrecognized codes map to [`TypeCode::Other`] so metadata resolvers
    /// can pass whatever the engine reports without pre-filtering.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => TypeCode::Char,
            12 => TypeCode::Varchar,
            -1 => TypeCode::LongVarchar,
            -15 => TypeCode::NChar,
            -9 => TypeCode::NVarchar,
            -16 => TypeCode::LongNVarchar,
            2 => TypeCode::Numeric,
            3 => TypeCode::Decimal,
            -7 => TypeCode::Bit,
            16 => TypeCode::Boolean,
            -6 => TypeCode::TinyInt,
            5 => TypeCode::SmallInt,
            4 => TypeCode::Integer,
            -5 => TypeCode::BigInt,
            7 => TypeCode::Real,
            6 => TypeCode::Float,
            8 => TypeCode::Double,
            -2 => TypeCode::Binary,
            -3 => TypeCode::Varbinary,
            -4 => TypeCode::LongVarbinary,
            91 => TypeCode::Date,
            92 => TypeCode::Time,
            93 => TypeCode::Timestamp,
            2005 => TypeCode::Clob,
            2011 => TypeCode::NClob,
            2004 => TypeCode::Blob,
            2009 => TypeCode::Xml,
            other => TypeCode::Other(other),
        }
    }

    /// The standard SQL/CLI integer code for this variant.
    pub fn code(&self) -> i32 {
        match self {
            TypeCode::Char => 1,
            TypeCode::Varchar => 12,
            TypeCode::LongVarchar => -1,
            TypeCode::NChar => -15,
            TypeCode::NVarchar => -9,
            TypeCode::LongNVarchar => -16,
            TypeCode::Numeric => 2,
            TypeCode::Decimal => 3,
            TypeCode::Bit => -7,
            TypeCode::Boolean => 16,
            TypeCode::TinyInt => -6,
            TypeCode::SmallInt => 5,
            TypeCode::Integer => 4,
            TypeCode::BigInt => -5,
            TypeCode::Real => 7,
            TypeCode::Float => 6,
            TypeCode::Double => 8,
            TypeCode::Binary => -2,
            TypeCode::Varbinary => -3,
            TypeCode::LongVarbinary => -4,
            TypeCode::Date => 91,
            TypeCode::Time => 92,
            TypeCode::Timestamp => 93,
            TypeCode::Clob => 2005,
            TypeCode::NClob => 2011,
            TypeCode::Blob => 2004,
            TypeCode::Xml => 2009,
            TypeCode::Other(code) => *code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_known() {
        assert_eq!(TypeCode::from_code(4), TypeCode::Integer);
        assert_eq!(TypeCode::from_code(12), TypeCode::Varchar);
        assert_eq!(TypeCode::from_code(93), TypeCode::Timestamp);
        assert_eq!(TypeCode::from_code(2004), TypeCode::Blob);
        assert_eq!(TypeCode::from_code(-7), TypeCode::Bit);
    }

    #[test]
    fn test_from_code_unknown() {
        assert_eq!(TypeCode::from_code(1111), TypeCode::Other(1111));
    }

    #[test]
    fn test_code_round_trip() {
        let codes = [
            TypeCode::Char,
            TypeCode::NVarchar,
            TypeCode::Decimal,
            TypeCode::TinyInt,
            TypeCode::Real,
            TypeCode::LongVarbinary,
            TypeCode::Time,
            TypeCode::NClob,
            TypeCode::Xml,
            TypeCode::Other(-999),
        ];
        for tc in codes {
            assert_eq!(TypeCode::from_code(tc.code()), tc);
        }
    }
}
