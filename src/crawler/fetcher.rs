//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawl stage:
//! - Building the HTTP client with the configured user agent and timeout
//! - Fetching a single link's body
//! - Classifying failures into the textual descriptions that end up in the
//!   crawl table's failure markers

use crate::config::FetchConfig;
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client used for all fetches in a run
///
/// The timeout bounds the whole request, connect included; a link that
/// exceeds it is recorded as a failure, never retried.
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a link and returns its body, or a failure description
///
/// A non-success HTTP status counts as a failure: the crawl table records
/// the attempt's outcome, not whatever error page the server happened to
/// serve. The description string becomes part of the persisted failure
/// marker, so it stays human-readable.
pub async fn fetch_body(client: &Client, link: &str) -> Result<String, String> {
    let response = client
        .get(link)
        .send()
        .await
        .map_err(|e| describe_error(&e))?;

    let response = response.error_for_status().map_err(|e| describe_error(&e))?;

    response.text().await.map_err(|e| describe_error(&e))
}

/// Renders a reqwest error as a stable, human-readable description
fn describe_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        return "request timed out".to_string();
    }
    if error.is_connect() {
        return "connection failed".to_string();
    }
    if let Some(status) = error.status() {
        return format!("HTTP status {}", status);
    }
    error.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> FetchConfig {
        FetchConfig {
            timeout_secs: 10,
            user_agent: "tidemark-test/1.0".to_string(),
        }
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&test_config());
        assert!(client.is_ok());
    }

    // Fetch behavior is covered end-to-end against mock servers in the
    // integration tests.
}
