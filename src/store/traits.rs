//! Storage trait and error types
//!
//! This module defines the trait interface for record-store backends and
//! associated error types.

use thiserror::Error;

/// Errors that can occur during storage operations
///
/// Storage errors are fatal to the stage that raised them: an append either
/// fully succeeds or the caller aborts. They are never absorbed into data.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Malformed row in table {table}: expected {expected} columns, got {actual}")]
    MalformedRow {
        table: String,
        expected: usize,
        actual: usize,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for append-only tabular storage backends
///
/// A table is a header row followed by zero or more data rows. Tables are
/// lazily initialized, strictly append-only, and owned by a single writer
/// for the duration of a run. `read_all` exists for the identity stage's
/// uniqueness scan; the crawl stage only ever appends.
pub trait RecordStore {
    /// Creates the table with its header row if it does not exist yet
    ///
    /// Idempotent: calling this against an existing table is a no-op and
    /// never touches its rows.
    fn ensure_initialized(&mut self, table: &str, header: &[&str]) -> StorageResult<()>;

    /// Appends exactly one row to the table
    ///
    /// Rows are flushed to durable storage before this returns, so a crash
    /// mid-run leaves every previously appended row intact. Existing rows
    /// are never rewritten or reordered.
    fn append(&mut self, table: &str, row: &[&str]) -> StorageResult<()>;

    /// Reads the full ordered sequence of data rows (header excluded)
    ///
    /// An absent table reads as empty. No side effects.
    fn read_all(&self, table: &str) -> StorageResult<Vec<Vec<String>>>;
}
