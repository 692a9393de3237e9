//! Link crawling module
//!
//! This module contains the crawl stage: fetch each supplied link in order,
//! extract its page title, and append one outcome row per link to the crawl
//! table. Fetch and parse failures are absorbed into the persisted record;
//! only storage failures abort the stage.

mod fetcher;
mod parser;

pub use fetcher::{build_http_client, fetch_body};
pub use parser::extract_title;

use crate::identity::Identity;
use crate::store::{RecordStore, StorageResult};
use reqwest::Client;

/// Name of the crawl table in the record store
pub const CRAWL_TABLE: &str = "crawled";

/// Header row of the crawl table
pub const CRAWL_HEADER: &[&str] = &["user_id", "full_name", "link", "content"];

/// Sentinel content for pages without a usable `<title>`
pub const NO_TITLE_SENTINEL: &str = "No Title Found";

/// Outcome of processing a single link
///
/// Kept as a tagged value in memory and serialized to its textual form only
/// when the row is written, so the failure taxonomy stays explicit instead
/// of living in magic strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Fetch succeeded and the document carried a non-empty title
    Title(String),
    /// Fetch succeeded but no usable title was present
    NoTitle,
    /// Fetch failed (network error, timeout, non-success status)
    Failed(String),
}

impl PageOutcome {
    /// Renders the outcome as the content string persisted in the crawl table
    pub fn into_content(self) -> String {
        match self {
            PageOutcome::Title(title) => title,
            PageOutcome::NoTitle => NO_TITLE_SENTINEL.to_string(),
            PageOutcome::Failed(description) => format!("Failed to retrieve: {}", description),
        }
    }

    fn is_failure(&self) -> bool {
        matches!(self, PageOutcome::Failed(_))
    }
}

/// Summary returned once every link has a persisted row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Crawls the given links on behalf of a resolved identity
///
/// Links are processed strictly one at a time, in input order. Each outcome
/// is appended immediately, so the crawl table holds one row per attempted
/// link even if the process dies mid-run, and a dead link never stops the
/// links after it from being tried. No retries: one attempt per link per
/// run.
///
/// # Errors
///
/// Only storage failures propagate; they abort the stage at the link being
/// written. Fetch and parse failures are recorded as row content.
pub async fn crawl<S: RecordStore>(
    store: &mut S,
    client: &Client,
    identity: &Identity,
    links: &[String],
) -> StorageResult<CrawlSummary> {
    store.ensure_initialized(CRAWL_TABLE, CRAWL_HEADER)?;

    let mut summary = CrawlSummary::default();
    for link in links {
        tracing::debug!("Fetching {}", link);
        let outcome = process_link(client, link).await;

        summary.attempted += 1;
        if outcome.is_failure() {
            tracing::warn!("Fetch failed for {}", link);
            summary.failed += 1;
        } else {
            summary.succeeded += 1;
        }

        let content = outcome.into_content();
        store.append(
            CRAWL_TABLE,
            &[
                identity.user_id.as_str(),
                identity.full_name.as_str(),
                link.as_str(),
                content.as_str(),
            ],
        )?;
    }

    tracing::info!(
        "Crawl complete: {} links, {} ok, {} failed",
        summary.attempted,
        summary.succeeded,
        summary.failed
    );
    Ok(summary)
}

/// Fetches one link and classifies the result
async fn process_link(client: &Client, link: &str) -> PageOutcome {
    match fetch_body(client, link).await {
        Ok(body) => match extract_title(&body) {
            Some(title) => PageOutcome::Title(title),
            None => PageOutcome::NoTitle,
        },
        Err(description) => PageOutcome::Failed(description),
    }
}
