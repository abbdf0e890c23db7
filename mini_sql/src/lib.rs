//! Generator for the mini-sql benchmark workload.
//!
//! The workload is a fixed script: one table, two indexes, then a scaled batch of
//! inserts followed by point selects, updates and deletes. Output is meant to be
//! piped straight into a database client, e.g. `mini-sql | sqlite3 bench.db`.

pub mod emitter;
pub mod error;
pub mod statement;

pub use emitter::{render, Emitter, Tally};
pub use error::EmitError;
pub use statement::{Statement, StatementKind, Workload};
