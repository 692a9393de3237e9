//! CSV-file storage implementation
//!
//! This module provides a CSV-backed implementation of the RecordStore
//! trait. Each registered table maps to one CSV file on disk; the file is
//! created with its header row on first access and only ever appended to
//! afterwards. The `csv` crate handles quoting, so field values containing
//! commas, quotes, or newlines survive a round trip.

use crate::store::traits::{RecordStore, StorageError, StorageResult};
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// CSV-file storage backend
///
/// Every append opens the file, writes one row, and flushes before
/// returning. That keeps each row durable on its own, at the cost of an
/// open per append. Fine for this workload: the crawl stage writes one row
/// per fetched link, and fetch latency dwarfs the file open.
pub struct CsvStore {
    tables: HashMap<String, PathBuf>,
}

impl CsvStore {
    /// Creates an empty store with no registered tables
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Registers a table name and the file path backing it
    ///
    /// Registration does not touch the filesystem; the file is created by
    /// the first `ensure_initialized` call.
    pub fn register(&mut self, table: &str, path: impl Into<PathBuf>) {
        self.tables.insert(table.to_string(), path.into());
    }

    fn table_path(&self, table: &str) -> StorageResult<&Path> {
        self.tables
            .get(table)
            .map(PathBuf::as_path)
            .ok_or_else(|| StorageError::UnknownTable(table.to_string()))
    }
}

impl Default for CsvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for CsvStore {
    fn ensure_initialized(&mut self, table: &str, header: &[&str]) -> StorageResult<()> {
        let path = self.table_path(table)?;

        if path.exists() {
            return Ok(());
        }

        tracing::debug!("Initializing table '{}' at {}", table, path.display());
        let file = File::create(path)?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(header)?;
        writer.flush()?;
        Ok(())
    }

    fn append(&mut self, table: &str, row: &[&str]) -> StorageResult<()> {
        let path = self.table_path(table)?;

        let file = OpenOptions::new().append(true).open(path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(row)?;
        writer.flush()?;
        Ok(())
    }

    fn read_all(&self, table: &str) -> StorageResult<Vec<Vec<String>>> {
        let path = self.table_path(table)?;

        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }
}
