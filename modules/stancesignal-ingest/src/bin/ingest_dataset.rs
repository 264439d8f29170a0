//! Run an X dataset export through the ingestion pipeline.
//!
//! Prints one JSON record per post on stdout; logs go to stderr.
//!
//! Usage: cargo run --bin ingest_dataset -- dataset.json --query "policy theme X"

use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stancesignal_common::Config;
use stancesignal_ingest::{ingest_from_source, DatasetFileSource, IngestPipeline};

#[derive(Parser, Debug)]
#[command(about = "Ingest an X dataset export and emit provenance-tagged signals")]
struct Args {
    /// JSON array of tweets exported from a scraper dataset
    path: PathBuf,

    /// Query the dataset was collected for. Falls back to INGEST_QUERY.
    #[arg(long)]
    query: Option<String>,

    /// Maximum number of posts to ingest
    #[arg(long, default_value_t = 1000)]
    limit: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("stancesignal=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let query = args
        .query
        .or_else(|| config.default_query.clone())
        .ok_or_else(|| anyhow!("--query or INGEST_QUERY is required"))?;

    let pipeline = IngestPipeline::new(&config);
    let source = DatasetFileSource::new(&args.path);
    let signals = ingest_from_source(&source, &pipeline, &query, args.limit).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for signal in &signals {
        serde_json::to_writer(&mut out, signal)?;
        writeln!(out)?;
    }

    let scored: Vec<u32> = signals
        .iter()
        .filter_map(|s| s.stance.map(|v| v.value() as u32))
        .collect();
    let mean_stance = if scored.is_empty() {
        None
    } else {
        Some(scored.iter().sum::<u32>() as f64 / scored.len() as f64)
    };
    info!(
        total = signals.len(),
        scored = scored.len(),
        mean_stance = ?mean_stance,
        "Done"
    );

    Ok(())
}
