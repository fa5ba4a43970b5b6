//! Seams to the external collaborators of the import core.
//!
//! The import core never owns a database session. It reaches the destination
//! through two async traits, [`DestinationMetadata`] and [`InsertExecutor`],
//! and streams failures out through the synchronous [`ImportReporter`] sink.
//! Tests plug in in-memory implementations; production callers wrap their
//! driver of choice.

use async_trait::async_trait;

use crate::error::BoxError;
use crate::import::ImportErrorRecord;

use super::schema::Column;
use super::value::SqlValue;

/// One raw source row: an ordered sequence of nullable strings, one per
/// requested column. Rows shorter than the column list are treated as padded
/// with missing values.
pub type RawRow = Vec<Option<String>>;

/// Live destination metadata, queried once per table at job start.
#[async_trait]
pub trait DestinationMetadata: Send + Sync {
    /// All columns of the given table, in destination order.
    async fn columns(&self, table: &str) -> Result<Vec<Column>, BoxError>;

    /// The identifier quote string the destination reports.
    ///
    /// A blank string means the destination does not support quoting and
    /// identifiers are emitted bare.
    fn identifier_quote(&self) -> &str;
}

/// The SQL execution primitive: runs one parameterized insert.
///
/// Owns the live session; the driver calls it once per row with the
/// statement text built at job start and the freshly bound parameters.
#[async_trait]
pub trait InsertExecutor: Send {
    /// Execute the insert, returning the affected row count.
    async fn execute(&mut self, sql: &str, params: &[SqlValue<'_>]) -> Result<u64, BoxError>;
}

/// Side-effecting sink for import error records.
///
/// Implementations write to a report file, UI stream, or counter; they must
/// not fail back into the driver.
pub trait ImportReporter {
    /// Accept one error record.
    fn report(&mut self, record: ImportErrorRecord);

    /// Ask the driver to stop before the next row (e.g. when an error cap is
    /// reached). Polled between rows; defaults to never cancelling.
    fn cancelled(&self) -> bool {
        false
    }
}
