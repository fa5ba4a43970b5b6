//! Core abstractions for destination-agnostic row import.
//!
//! - [`types`]: the closed enumeration of destination SQL type codes
//! - [`value`]: typed parameter representation bound per column
//! - [`lob`]: scoped large-object handles released after every row
//! - [`schema`]: destination column descriptors
//! - [`identifier`]: identifier validation and quoting
//! - [`traits`]: seams to the external collaborators (metadata provider,
//!   execution primitive, error reporter)
//!
//! Everything here is independent of any particular database engine; drivers
//! plug in behind the traits.

pub mod identifier;
pub mod lob;
pub mod schema;
pub mod traits;
pub mod types;
pub mod value;

// Re-export commonly used types for convenience
pub use lob::{LobBody, LobHandle};
pub use schema::Column;
pub use traits::{DestinationMetadata, ImportReporter, InsertExecutor, RawRow};
pub use types::TypeCode;
pub use value::SqlValue;
