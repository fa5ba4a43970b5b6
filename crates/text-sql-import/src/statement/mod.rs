//! Parameterized INSERT statement construction.

use crate::core::schema::Column;
use crate::error::Result;

pub use crate::core::identifier::{quote_identifier, validate_identifier};

/// Build the parameterized insert text for a table and ordered column list.
///
/// Emits `INSERT INTO <q>table<q> (<q>c1<q>,<q>c2<q>,...) VALUES (?,?,...)`
/// with `quote` (the destination's reported quote string) around every
/// identifier. Placeholder order is exactly the column order. Built once per
/// table per job and reused across all rows.
pub fn build_insert_statement(quote: &str, table: &str, columns: &[Column]) -> Result<String> {
    let mut sql = String::with_capacity(64 + columns.len() * 16);

    sql.push_str("INSERT INTO ");
    sql.push_str(&quote_identifier(table, quote)?);
    sql.push_str(" (");

    for (i, column) in columns.iter().enumerate() {
        if i != 0 {
            sql.push(',');
        }
        sql.push_str(&quote_identifier(&column.name, quote)?);
    }

    sql.push_str(") VALUES (");

    for i in 0..columns.len() {
        if i != 0 {
            sql.push(',');
        }
        sql.push('?');
    }

    sql.push(')');

    Ok(sql)
}
