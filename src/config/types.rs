use serde::Deserialize;

/// Main configuration structure for Tidemark
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    pub output: OutputConfig,
}

/// Pipeline input configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Display name of the user the links are ingested for
    #[serde(rename = "user-full-name")]
    pub user_full_name: String,

    /// Links to crawl, processed in this order
    #[serde(default)]
    pub links: Vec<String>,
}

/// Fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the identity table CSV file
    #[serde(rename = "identity-table-path")]
    pub identity_table_path: String,

    /// Path to the crawl table CSV file
    #[serde(rename = "crawl-table-path")]
    pub crawl_table_path: String,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("tidemark/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}
