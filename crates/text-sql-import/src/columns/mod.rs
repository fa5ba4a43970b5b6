//! Column resolution against destination metadata.
//!
//! At job start the requested column names are matched (case-sensitively,
//! per the destination's reported identifiers) against the live table
//! metadata. A missing column is either a job-fatal
//! [`ImportError::ColumnNotFound`] or, when tolerated, a placeholder that
//! [`ColumnSet`] compacts away so execution only ever sees real columns.

use crate::core::schema::Column;
use crate::core::traits::{DestinationMetadata, RawRow};
use crate::error::{ImportError, Result};

/// Resolve requested column names to destination descriptors.
///
/// The output has one entry per requested name, in request order. When
/// `tolerate_missing` is set, a name absent from the destination yields
/// `None` at its position; otherwise resolution stops immediately with
/// [`ImportError::ColumnNotFound`], a structural mismatch that is fatal even
/// under row-level error tolerance.
pub async fn resolve_columns(
    meta: &impl DestinationMetadata,
    table: &str,
    names: &[String],
    tolerate_missing: bool,
) -> Result<Vec<Option<Column>>> {
    let all = meta
        .columns(table)
        .await
        .map_err(|source| ImportError::Metadata {
            table: table.to_string(),
            source,
        })?;

    let mut resolved = Vec::with_capacity(names.len());

    for name in names {
        let found = all.iter().find(|c| &c.name == name).cloned();

        if found.is_none() && !tolerate_missing {
            return Err(ImportError::ColumnNotFound {
                table: table.to_string(),
                column: name.clone(),
            });
        }

        resolved.push(found);
    }

    Ok(resolved)
}

/// A resolved column list with its placeholder positions compacted away.
///
/// Raw rows arrive with one value per *requested* column; when some of those
/// were tolerated as missing, [`ColumnSet::project_row`] drops the matching
/// value positions so the row lines up with the compacted descriptors. When
/// nothing was compacted the projection hands the row back unmodified; the
/// identity fast path is part of the contract, not an optimization detail.
#[derive(Debug)]
pub struct ColumnSet {
    columns: Vec<Column>,
    /// Per requested position: keep the raw value or drop it. `None` when
    /// every requested column resolved.
    keep: Option<Vec<bool>>,
}

impl ColumnSet {
    /// Compact a resolved descriptor list.
    pub fn new(resolved: Vec<Option<Column>>) -> Self {
        if resolved.iter().all(Option::is_some) {
            return Self {
                columns: resolved.into_iter().flatten().collect(),
                keep: None,
            };
        }

        let keep = resolved.iter().map(Option::is_some).collect();
        Self {
            columns: resolved.into_iter().flatten().collect(),
            keep: Some(keep),
        }
    }

    /// The real destination columns, in request order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Whether any requested column was dropped during compaction.
    pub fn is_compacted(&self) -> bool {
        self.keep.is_some()
    }

    /// Align one raw row with the compacted columns.
    ///
    /// Returns the row untouched (same allocation) when no column was
    /// dropped; otherwise returns a new row holding only the kept positions.
    /// Rows shorter than the requested column list simply have fewer kept
    /// values; the driver binds NULL for the tail.
    pub fn project_row(&self, row: RawRow) -> RawRow {
        let Some(keep) = &self.keep else {
            return row;
        };

        row.into_iter()
            .zip(keep.iter())
            .filter_map(|(value, keep)| keep.then_some(value))
            .collect()
    }
}
