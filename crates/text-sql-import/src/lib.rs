//! # text-sql-import
//!
//! Core library for importing textually-encoded tabular rows into a SQL
//! destination. It bridges an untyped row-of-strings representation (as
//! produced by delimited-file, spreadsheet, or JSON readers) to fully typed
//! `INSERT` parameters, and drives row-at-a-time execution with a
//! configurable error-tolerance policy:
//!
//! - **Value conversion** from text to the full breadth of SQL column types
//!   (numeric, temporal, binary, character, large-object, XML) under per-job
//!   format rules
//! - **Column resolution** against live destination metadata, optionally
//!   tolerating unknown columns
//! - **Row-at-a-time driving** where a single bad row never corrupts the
//!   import, never leaks per-row resources, and is accounted for precisely
//!
//! The live database session, source-file parsing, and job orchestration are
//! external collaborators reached through the traits in [`core::traits`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use text_sql_import::{DataFormat, ImportOptions, RowImporter};
//!
//! # async fn run(meta: impl text_sql_import::DestinationMetadata,
//! #              exec: impl text_sql_import::InsertExecutor,
//! #              mut reporter: impl text_sql_import::ImportReporter) -> text_sql_import::Result<()> {
//! let mut importer = RowImporter::new(meta, exec, ImportOptions::default());
//! let rows = vec![vec![Some("1".to_string()), Some("Alice".to_string())]];
//! let summary = importer
//!     .import_table(
//!         "users",
//!         &["id".to_string(), "name".to_string()],
//!         rows,
//!         DataFormat::default(),
//!         &mut reporter,
//!     )
//!     .await?;
//! println!("imported {} rows", summary.rows_processed);
//! # Ok(())
//! # }
//! ```

pub mod columns;
pub mod convert;
pub mod core;
pub mod error;
pub mod format;
pub mod import;
pub mod statement;

// Re-exports for convenient access
pub use crate::columns::{resolve_columns, ColumnSet};
pub use crate::convert::convert;
pub use crate::core::lob::{LobBody, LobHandle};
pub use crate::core::schema::Column;
pub use crate::core::traits::{DestinationMetadata, ImportReporter, InsertExecutor, RawRow};
pub use crate::core::types::TypeCode;
pub use crate::core::value::SqlValue;
pub use crate::error::{BoxError, ConvertError, ImportError, Result};
pub use crate::format::{BinaryFormat, DataFormat, NumberFormat};
pub use crate::import::{
    ImportErrorRecord, ImportOptions, ImportSummary, InsertContext, RowImporter,
};
pub use crate::statement::build_insert_statement;
