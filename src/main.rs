//! Tidemark main entry point
//!
//! This is the command-line interface for the Tidemark link ingestion
//! pipeline.

use clap::Parser;
use std::path::PathBuf;
use tidemark::config::load_config_with_hash;
use tidemark::pipeline;
use tracing_subscriber::EnvFilter;

/// Tidemark: an append-only link ingestion pipeline
///
/// Tidemark resolves a user's display name to a durable identity, fetches
/// each configured link, and appends one title-or-failure record per link
/// to an append-only table. Repeated runs never duplicate identities and
/// never rewrite existing rows.
#[derive(Parser, Debug)]
#[command(name = "tidemark")]
#[command(version = "1.0.0")]
#[command(about = "An append-only link ingestion pipeline", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, _config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_run(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("tidemark=info,warn"),
            1 => EnvFilter::new("tidemark=debug,info"),
            2 => EnvFilter::new("tidemark=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would run
fn handle_dry_run(config: &tidemark::config::Config) {
    println!("=== Tidemark Dry Run ===\n");

    println!("Pipeline:");
    println!("  User: {}", config.pipeline.user_full_name);

    println!("\nFetch:");
    println!("  Timeout: {}s", config.fetch.timeout_secs);
    println!("  User agent: {}", config.fetch.user_agent);

    println!("\nOutput:");
    println!("  Identity table: {}", config.output.identity_table_path);
    println!("  Crawl table: {}", config.output.crawl_table_path);

    println!("\nLinks ({}):", config.pipeline.links.len());
    for link in &config.pipeline.links {
        println!("  - {}", link);
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would crawl {} links for '{}'",
        config.pipeline.links.len(),
        config.pipeline.user_full_name
    );
}

/// Handles the main pipeline run
async fn handle_run(config: tidemark::config::Config) -> Result<(), Box<dyn std::error::Error>> {
    match pipeline::run(config).await {
        Ok(report) => {
            tracing::info!("Pipeline completed successfully");
            println!(
                "✓ {} links processed for {} ({} ok, {} failed)",
                report.summary.attempted,
                report.identity.user_id,
                report.summary.succeeded,
                report.summary.failed
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Pipeline failed: {}", e);
            Err(e.into())
        }
    }
}
