//! Pipeline orchestration
//!
//! Thin harness that sequences the two stages: resolve the configured user
//! to an identity, then crawl the configured links on its behalf. All
//! invariants live in the stages themselves; this module only wires the
//! store and HTTP client together and passes the resolved identity forward.

use crate::config::Config;
use crate::crawler::{self, CrawlSummary, CRAWL_TABLE};
use crate::identity::{self, Identity, IDENTITY_TABLE};
use crate::store::CsvStore;
use crate::TidemarkError;

/// Result of one full pipeline run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// The identity the links were ingested for
    pub identity: Identity,
    /// Per-run crawl counts
    pub summary: CrawlSummary,
}

/// Builds the record store with both tables registered from config
pub fn build_store(config: &Config) -> CsvStore {
    let mut store = CsvStore::new();
    store.register(IDENTITY_TABLE, config.output.identity_table_path.clone());
    store.register(CRAWL_TABLE, config.output.crawl_table_path.clone());
    store
}

/// Runs the two-stage pipeline described by the configuration
///
/// Stage order is fixed: identity resolution first, then the crawl with the
/// resolver's output. Fetch failures are absorbed into crawl rows; only
/// configuration, storage, and client-construction failures surface here.
pub async fn run(config: Config) -> Result<PipelineReport, TidemarkError> {
    let mut store = build_store(&config);

    tracing::info!("Resolving identity for '{}'", config.pipeline.user_full_name);
    let identity = identity::resolve(&mut store, &config.pipeline.user_full_name)?;

    let client = crawler::build_http_client(&config.fetch)?;

    tracing::info!(
        "Crawling {} links as {}",
        config.pipeline.links.len(),
        identity.user_id
    );
    let summary = crawler::crawl(&mut store, &client, &identity, &config.pipeline.links).await?;

    Ok(PipelineReport { identity, summary })
}
