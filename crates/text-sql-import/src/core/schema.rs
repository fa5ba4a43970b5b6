//! Destination column descriptors.

use serde::{Deserialize, Serialize};

use super::types::TypeCode;

/// One destination column as reported by the metadata provider.
///
/// Immutable after resolution; the driver binds parameters in the order of
/// the resolved descriptor list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name, exactly as the destination reports it.
    pub name: String,

    /// Engine-reported SQL type code.
    pub type_code: TypeCode,
}

impl Column {
    /// Create a column descriptor.
    pub fn new(name: impl Into<String>, type_code: TypeCode) -> Self {
        Self {
            name: name.into(),
            type_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let col = Column::new("amount", TypeCode::Decimal);
        assert_eq!(col.name, "amount");
        assert_eq!(col.type_code, TypeCode::Decimal);
    }
}
