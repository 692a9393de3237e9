use crate::config::types::{Config, FetchConfig, OutputConfig, PipelineConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_pipeline_config(&config.pipeline)?;
    validate_fetch_config(&config.fetch)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates pipeline input configuration
fn validate_pipeline_config(config: &PipelineConfig) -> Result<(), ConfigError> {
    // An empty display name would derive the degenerate id "_"; reject it
    // here so the resolver never sees one.
    if config.user_full_name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_full_name cannot be empty".to_string(),
        ));
    }

    for link in &config.links {
        let url = Url::parse(link)
            .map_err(|e| ConfigError::InvalidLink(format!("'{}': {}", link, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidLink(format!(
                "'{}': only http and https links are supported",
                link
            )));
        }
    }

    Ok(())
}

/// Validates fetch behavior configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.identity_table_path.is_empty() {
        return Err(ConfigError::Validation(
            "identity_table_path cannot be empty".to_string(),
        ));
    }

    if config.crawl_table_path.is_empty() {
        return Err(ConfigError::Validation(
            "crawl_table_path cannot be empty".to_string(),
        ));
    }

    if config.identity_table_path == config.crawl_table_path {
        return Err(ConfigError::Validation(
            "identity_table_path and crawl_table_path must differ".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            pipeline: PipelineConfig {
                user_full_name: "Ada Lovelace".to_string(),
                links: vec!["https://example.com/".to_string()],
            },
            fetch: FetchConfig::default(),
            output: OutputConfig {
                identity_table_path: "./users.csv".to_string(),
                crawl_table_path: "./crawled_data.csv".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_empty_user_name_rejected() {
        let mut config = valid_config();
        config.pipeline.user_full_name = "  ".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_no_links_is_allowed() {
        // A run with nothing to crawl still resolves the identity
        let mut config = valid_config();
        config.pipeline.links.clear();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_unparseable_link_rejected() {
        let mut config = valid_config();
        config.pipeline.links.push("not a url".to_string());
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidLink(_))
        ));
    }

    #[test]
    fn test_non_http_link_rejected() {
        let mut config = valid_config();
        config.pipeline.links.push("ftp://example.com/".to_string());
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidLink(_))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = valid_config();
        config.fetch.timeout_secs = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_colliding_table_paths_rejected() {
        let mut config = valid_config();
        config.output.crawl_table_path = config.output.identity_table_path.clone();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }
}
