//! Scopus Author Search - Entry Point
//!
//! Runs one author search and prints the normalized records.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scopus_search::config::api;
use scopus_search::formatters;
use scopus_search::models::ResponseFormat;
use scopus_search::{AuthorSearch, Config, ScopusClient, SearchOptions};

#[derive(Parser, Debug)]
#[command(name = "scopus-author-search")]
#[command(about = "Search Scopus for authors, caching raw results on disk")]
#[command(version)]
struct Cli {
    /// Query in Scopus author search syntax, e.g. "authlast(Einstein) and authfirst(Albert)"
    query: String,

    /// Entries requested per round-trip
    #[arg(long, default_value_t = api::DEFAULT_COUNT, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Zero-based offset of the first entry
    #[arg(long, default_value_t = api::DEFAULT_START)]
    start: u32,

    /// Fail when the search matches more authors than this
    #[arg(long, default_value_t = api::MAX_ENTRIES)]
    max_entries: u64,

    /// Ignore any cached result and fetch again
    #[arg(long)]
    refresh: bool,

    /// Output format
    #[arg(long, default_value = "markdown")]
    format: ResponseFormat,

    /// Print the raw result set instead of normalized records
    #[arg(long)]
    raw: bool,

    /// Elsevier API key
    #[arg(long, env = "ELS_APIKEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Institutional token for off-campus access
    #[arg(long, env = "ELS_INSTTOKEN", hide_env_values = true)]
    inst_token: Option<String>,

    /// Cache directory (default: ~/.scopus/author_search)
    #[arg(long, env = "SCOPUS_CACHE_DIR")]
    cache_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let mut config = Config::new(cli.api_key, cli.inst_token);
    if let Some(dir) = cli.cache_dir {
        config = config.with_cache_dir(dir);
    }
    if !config.has_api_key() {
        tracing::warn!("No ELS_APIKEY configured, uncached searches will be rejected");
    }

    let client = ScopusClient::new(config)?;
    let options = SearchOptions::default()
        .count(cli.count)
        .start(cli.start)
        .max_entries(cli.max_entries)
        .refresh(cli.refresh);

    let search = AuthorSearch::new(&client, cli.query, options)
        .await
        .map_err(|e| anyhow::anyhow!(e.to_user_message()))?;

    tracing::info!(query = search.query(), hits = search.len(), "Search complete");

    if cli.raw {
        return Ok(search.to_string());
    }

    let authors = search.authors().map_err(|e| anyhow::anyhow!(e.to_user_message()))?;
    Ok(formatters::render(&authors, cli.format)?)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Credentials may live in a .env file
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Starting scopus-author-search");

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
