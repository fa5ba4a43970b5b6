//! Row-at-a-time insert driving.
//!
//! [`RowImporter`] owns the per-table import loop. Each row moves through
//! four steps: **binding** (text to typed parameters via
//! [`crate::convert::convert`]), **executing** (one round-trip through the
//! [`InsertExecutor`]), **reporting** (queued error records forwarded to the
//! [`ImportReporter`], tolerant jobs only), and **advancing** (row counter
//! increment plus scoped-resource release, unconditionally, whatever the
//! earlier steps did).
//!
//! Error tolerance is decided per job: with `abort_on_error` the first data
//! or execution error stops the import; without it a failed conversion binds
//! NULL for that one column and a failed execution skips the row, both
//! leaving an [`ImportErrorRecord`] behind. Structural errors (unknown
//! column, unsupported SQL type) abort regardless.

mod context;

pub use context::InsertContext;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::columns::{resolve_columns, ColumnSet};
use crate::convert::convert;
use crate::core::schema::Column;
use crate::core::traits::{DestinationMetadata, ImportReporter, InsertExecutor, RawRow};
use crate::core::value::SqlValue;
use crate::error::{ConvertError, ImportError, Result};
use crate::format::DataFormat;
use crate::statement::build_insert_statement;

/// Per-job import behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// `true`: any data or execution error stops the whole job.
    /// `false`: errors are recorded and the job continues.
    pub abort_on_error: bool,

    /// `true`: requested columns absent from the destination are skipped.
    /// `false`: an absent column fails the job before the first row.
    pub tolerate_missing_columns: bool,
}

/// Outcome of one table's import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows taken from the source, failed rows included.
    pub rows_processed: usize,

    /// Rows that produced at least one error record (partial or total
    /// failures).
    pub rows_failed: usize,
}

/// One recorded import failure, with enough context to locate and fix the
/// offending source data.
#[derive(Debug, Clone)]
pub struct ImportErrorRecord {
    /// Destination table.
    pub table: String,

    /// Zero-based ordinal of the row in its source sequence.
    pub row_index: usize,

    /// Column whose value failed, when the failure is column-scoped.
    pub column: Option<String>,

    /// The offending source text, when the failure is column-scoped.
    pub raw_value: Option<String>,

    /// Rendered error chain.
    pub cause: String,
}

impl ImportErrorRecord {
    /// Build a record from a tolerable import error without re-deriving
    /// state.
    pub fn from_error(error: &ImportError) -> Self {
        let cause = error.format_detailed();
        match error {
            ImportError::Conversion {
                table,
                row_index,
                column,
                raw_value,
                ..
            } => Self {
                table: table.clone(),
                row_index: *row_index,
                column: Some(column.clone()),
                raw_value: raw_value.clone(),
                cause,
            },
            ImportError::Execution {
                table, row_index, ..
            } => Self {
                table: table.clone(),
                row_index: *row_index,
                column: None,
                raw_value: None,
                cause,
            },
            other => Self {
                table: String::new(),
                row_index: 0,
                column: None,
                raw_value: None,
                cause: other.format_detailed(),
            },
        }
    }
}

/// Drives row-at-a-time inserts for one destination.
///
/// Holds the metadata provider and execution primitive for the lifetime of a
/// job; [`RowImporter::import_table`] is called once per destination table.
pub struct RowImporter<M, E> {
    metadata: M,
    executor: E,
    options: ImportOptions,
}

impl<M, E> RowImporter<M, E>
where
    M: DestinationMetadata,
    E: InsertExecutor,
{
    /// Create an importer over the given collaborators.
    pub fn new(metadata: M, executor: E, options: ImportOptions) -> Self {
        Self {
            metadata,
            executor,
            options,
        }
    }

    /// Import every row of `rows` into `table`.
    ///
    /// Columns are resolved and the insert text built once, up front; rows
    /// are then processed strictly in source order. Returns the summary, or
    /// the first job-fatal error. Counters for rows before a fatal row
    /// remain valid, and the failing row's scoped resources are released
    /// before the error propagates.
    pub async fn import_table<I, R>(
        &mut self,
        table: &str,
        column_names: &[String],
        rows: I,
        format: DataFormat,
        reporter: &mut R,
    ) -> Result<ImportSummary>
    where
        I: IntoIterator<Item = RawRow>,
        R: ImportReporter,
    {
        let resolved = resolve_columns(
            &self.metadata,
            table,
            column_names,
            self.options.tolerate_missing_columns,
        )
        .await?;
        let column_set = ColumnSet::new(resolved);

        let sql =
            build_insert_statement(self.metadata.identifier_quote(), table, column_set.columns())?;
        debug!(table, %sql, "prepared insert statement");

        let mut ctx = InsertContext::new(Arc::new(format), table);
        let mut summary = ImportSummary::default();

        for row in rows {
            if reporter.cancelled() {
                info!(
                    table,
                    rows = summary.rows_processed,
                    "import cancelled by reporter"
                );
                break;
            }

            let row = column_set.project_row(row);
            let outcome = self
                .process_row(&sql, column_set.columns(), &row, &mut ctx, reporter)
                .await;

            // Advancing runs whatever the row's outcome was: counter first,
            // then release of every row-scoped resource.
            ctx.advance_row();

            summary.rows_processed += 1;
            match outcome {
                Ok(clean) => {
                    if !clean {
                        summary.rows_failed += 1;
                    }
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            table,
            rows = summary.rows_processed,
            failed = summary.rows_failed,
            "import complete"
        );
        Ok(summary)
    }

    /// Bind, execute, and report one row. Returns `Ok(true)` for a clean
    /// insert, `Ok(false)` when something was tolerated, `Err` when the job
    /// must abort. Never touches the row counter or the resource registry;
    /// the caller advances the context afterwards.
    async fn process_row<R>(
        &mut self,
        sql: &str,
        columns: &[Column],
        row: &RawRow,
        ctx: &mut InsertContext,
        reporter: &mut R,
    ) -> Result<bool>
    where
        R: ImportReporter,
    {
        let abort_on_error = self.options.abort_on_error;
        let mut pending: Vec<ImportErrorRecord> = Vec::new();

        // Binding
        let mut params: Vec<SqlValue<'_>> = Vec::with_capacity(columns.len());
        for (i, column) in columns.iter().enumerate() {
            let raw = row.get(i).and_then(|v| v.as_deref());

            match convert(ctx, column.type_code, raw) {
                Ok(value) => params.push(value),
                Err(ConvertError::UnsupportedType(type_code)) => {
                    // Structural: the exchange layer cannot bind this column
                    // for any row, so tolerance does not apply.
                    return Err(ImportError::UnsupportedType {
                        table: ctx.table().to_string(),
                        row_index: ctx.row_index(),
                        column: column.name.clone(),
                        type_code,
                    });
                }
                Err(source) => {
                    let err = ImportError::Conversion {
                        table: ctx.table().to_string(),
                        row_index: ctx.row_index(),
                        column: column.name.clone(),
                        raw_value: raw.map(str::to_string),
                        source,
                    };
                    if abort_on_error {
                        return Err(err);
                    }
                    warn!(
                        table = ctx.table(),
                        row = ctx.row_index(),
                        column = %column.name,
                        "conversion failed, binding NULL"
                    );
                    params.push(SqlValue::Null(column.type_code));
                    pending.push(ImportErrorRecord::from_error(&err));
                }
            }
        }

        // Executing
        match self.executor.execute(sql, &params).await {
            Ok(affected) => {
                debug!(
                    table = ctx.table(),
                    row = ctx.row_index(),
                    affected,
                    "row inserted"
                );
            }
            Err(source) => {
                let err = ImportError::Execution {
                    table: ctx.table().to_string(),
                    row_index: ctx.row_index(),
                    source,
                };
                if abort_on_error {
                    return Err(err);
                }
                warn!(
                    table = ctx.table(),
                    row = ctx.row_index(),
                    "insert rejected, row skipped"
                );
                pending.push(ImportErrorRecord::from_error(&err));
            }
        }

        // Reporting: each queued record is forwarded exactly once.
        let clean = pending.is_empty();
        for record in pending {
            reporter.report(record);
        }

        Ok(clean)
    }
}
