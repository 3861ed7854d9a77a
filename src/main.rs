// src/main.rs

//! reddit-corpus: Subreddit Text Corpus Scraper CLI

use clap::Parser;
use reddit_corpus::{error::Result, models::Config, pipeline::run_scrape};

/// reddit-corpus - Subreddit Text Corpus Scraper
#[derive(Parser, Debug)]
#[command(
    name = "reddit-corpus",
    version,
    about = "Scrapes subreddit post and comment text into a CSV corpus"
)]
struct Cli {
    /// Subreddit URL or r/<name> reference
    subreddit: String,

    /// Maximum number of posts to fetch (defaults to the configured limit)
    limit: Option<usize>,

    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    config.validate()?;

    let post_limit = cli.limit.unwrap_or(config.scraper.post_limit);
    run_scrape(&config, &cli.subreddit, post_limit).await?;

    log::info!("Done!");
    Ok(())
}
