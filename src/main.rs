use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use murmur::config::Config;
use murmur::output::terminal;
use murmur::pipeline::fetch::{clamp_count, PostFetcher};
use murmur::report;
use murmur::search::client::XSearchClient;
use murmur::search::traits::PostSearchProvider;
use murmur::sentiment::classifier::SentimentClassifier;

/// Murmur: sentiment snapshot for X/Twitter search results.
///
/// Searches recent posts for a query, labels each one positive, neutral, or
/// negative, and prints the percentage split with sample posts.
#[derive(Parser)]
#[command(name = "murmur", version, about)]
struct Cli {
    /// Search query (X recent-search syntax)
    #[arg(default_value = "dhanushaishwaryadivorce")]
    query: String,

    /// Number of posts to analyze (one page, capped at 100)
    #[arg(long, short = 'n', default_value = "200")]
    count: usize,

    /// Sample posts to show per sentiment class
    #[arg(long, default_value = "5")]
    samples: usize,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("murmur=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let token = config.require_token()?;

    let provider = XSearchClient::new(token, &config.api_url, config.timeout)
        .map(|client| Box::new(client) as Box<dyn PostSearchProvider>);
    let fetcher = PostFetcher::new(provider, SentimentClassifier::default());

    let count = clamp_count(cli.count);
    if count != cli.count {
        warn!(requested = cli.count, using = count, "Post count clamped to one search page");
    }

    info!(query = %cli.query, count = count, "Searching recent posts");

    let spinner = if cli.json { None } else { Some(search_spinner(&cli.query)) };

    let fetched = fetcher.fetch(&cli.query, count).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let fetched = fetched.context("Cannot search without an authenticated client")?;

    let summary = report::summarize(&cli.query, &fetched, cli.samples);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        terminal::display_summary(&summary);
    }

    Ok(())
}

fn search_spinner(query: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Searching for \"{query}\"..."));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
