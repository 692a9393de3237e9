//! Tidemark: an append-only link ingestion pipeline
//!
//! This crate implements a two-stage ETL pipeline: a display name is resolved
//! to a stable, deduplicated identity, then each supplied link is fetched and
//! its page title (or a failure marker) is appended to an audit-style record
//! store. Repeated runs never duplicate identities and never rewrite rows.

pub mod config;
pub mod crawler;
pub mod identity;
pub mod pipeline;
pub mod store;

use thiserror::Error;

/// Main error type for Tidemark operations
#[derive(Debug, Error)]
pub enum TidemarkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] store::StorageError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid link in config: {0}")]
    InvalidLink(String),
}

/// Result type alias for Tidemark operations
pub type Result<T> = std::result::Result<T, TidemarkError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, CrawlSummary, PageOutcome};
pub use identity::{resolve, Identity};
pub use store::{CsvStore, RecordStore};
