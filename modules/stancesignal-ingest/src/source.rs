// ExternalSource is the seam to whatever fetches posts from outside the
// platform. Fetch failures are the only errors on the ingestion path; the
// pipeline itself is total.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use stancesignal_common::StanceSignalError;

use crate::external::{ExternalPost, Tweet};
use crate::pipeline::{IngestPipeline, IngestedSignal};

#[async_trait]
pub trait ExternalSource: Send + Sync {
    /// Fetch up to `limit` posts matching `query`.
    async fn fetch(&self, query: &str, limit: u32) -> Result<Vec<ExternalPost>, StanceSignalError>;
}

/// Fetch from `source` and run every post through `pipeline`.
pub async fn ingest_from_source(
    source: &dyn ExternalSource,
    pipeline: &IngestPipeline,
    query: &str,
    limit: u32,
) -> Result<Vec<IngestedSignal>, StanceSignalError> {
    let posts = source.fetch(query, limit).await?;
    let signals = pipeline.ingest_batch(&posts);

    let visible = signals
        .iter()
        .filter(|s| s.provenance.policy_flags().text_visible())
        .count();
    info!(query, fetched = posts.len(), visible, "Ingested external posts");

    Ok(signals)
}

/// Reads a JSON array of tweets exported from a scraper dataset.
pub struct DatasetFileSource {
    path: PathBuf,
}

impl DatasetFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ExternalSource for DatasetFileSource {
    async fn fetch(&self, query: &str, limit: u32) -> Result<Vec<ExternalPost>, StanceSignalError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let tweets: Vec<Tweet> = serde_json::from_str(&raw)?;
        let fetched_at = Utc::now();

        info!(path = %self.path.display(), items = tweets.len(), "Loaded dataset export");

        Ok(tweets
            .into_iter()
            .take(limit as usize)
            .map(|tweet| tweet.into_external(fetched_at, query))
            .collect())
    }
}
