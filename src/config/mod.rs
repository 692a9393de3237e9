//! Configuration module
//!
//! TOML configuration for a pipeline run: who the links belong to, which
//! links to crawl, fetch behavior, and where the two tables live on disk.

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use types::{Config, FetchConfig, OutputConfig, PipelineConfig};
pub use validation::validate;
