//! Record store module
//!
//! This module provides the append-only tabular persistence layer shared by
//! the identity and crawl stages: a `RecordStore` trait plus the CSV-file
//! backed implementation used in production.

mod csv_store;
mod traits;

pub use csv_store::CsvStore;
pub use traits::{RecordStore, StorageError, StorageResult};
