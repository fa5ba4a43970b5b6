//! Per-table insert state.

use std::sync::Arc;

use tracing::trace;

use crate::core::lob::LobHandle;
use crate::format::DataFormat;

/// Mutable state shared by every row of one table's import.
///
/// Holds the job's format configuration, the destination table name, the
/// zero-based row counter, and the registry of scoped large-object handles
/// opened while binding the current row. The counter advances exactly once
/// per row, success or failure, and the registry is drained at the same
/// point, so no handle opened for row *i* survives past row *i*.
#[derive(Debug)]
pub struct InsertContext {
    format: Arc<DataFormat>,
    table: String,
    row_index: usize,
    lobs: Vec<Arc<LobHandle>>,
}

impl InsertContext {
    /// Create the context for one table's import.
    pub fn new(format: Arc<DataFormat>, table: impl Into<String>) -> Self {
        Self {
            format,
            table: table.into(),
            row_index: 0,
            lobs: Vec::new(),
        }
    }

    /// Shared handle to the format configuration, for callers that also need
    /// the context mutably while converting.
    pub fn format_shared(&self) -> Arc<DataFormat> {
        Arc::clone(&self.format)
    }

    /// The destination table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Zero-based ordinal of the row currently being processed.
    pub fn row_index(&self) -> usize {
        self.row_index
    }

    /// Register a scoped large-object handle for release after this row.
    pub fn register_lob(&mut self, lob: Arc<LobHandle>) {
        self.lobs.push(lob);
    }

    /// Number of handles currently registered for the in-flight row.
    pub fn pending_lobs(&self) -> usize {
        self.lobs.len()
    }

    /// Finish the current row: increment the counter, then release and clear
    /// every registered handle. Runs on every exit path, including aborts.
    ///
    /// Returns the number of handles released.
    pub fn advance_row(&mut self) -> usize {
        self.row_index += 1;
        self.release_lobs()
    }

    fn release_lobs(&mut self) -> usize {
        let count = self.lobs.len();
        for lob in self.lobs.drain(..) {
            lob.release();
        }
        if count > 0 {
            trace!(count, table = %self.table, "released row-scoped large objects");
        }
        count
    }
}

impl Drop for InsertContext {
    fn drop(&mut self) {
        // Normally empty here; a panicking caller must not leak handles.
        self.release_lobs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_advances_per_row() {
        let mut ctx = InsertContext::new(Arc::new(DataFormat::default()), "t");
        assert_eq!(ctx.row_index(), 0);
        ctx.advance_row();
        ctx.advance_row();
        assert_eq!(ctx.row_index(), 2);
    }

    #[test]
    fn test_advance_releases_and_clears() {
        let mut ctx = InsertContext::new(Arc::new(DataFormat::default()), "t");
        let lob = LobHandle::clob("abc");
        ctx.register_lob(Arc::clone(&lob));
        assert_eq!(ctx.pending_lobs(), 1);

        assert_eq!(ctx.advance_row(), 1);
        assert_eq!(ctx.pending_lobs(), 0);
        assert!(lob.is_released());

        // Next row starts with an empty registry.
        assert_eq!(ctx.advance_row(), 0);
    }

    #[test]
    fn test_drop_drains_leftovers() {
        let lob = LobHandle::blob(vec![1]);
        {
            let mut ctx = InsertContext::new(Arc::new(DataFormat::default()), "t");
            ctx.register_lob(Arc::clone(&lob));
        }
        assert!(lob.is_released());
    }
}
