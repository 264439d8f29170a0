use std::sync::Arc;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use stancesignal_common::{
    detect_pii, map_attributes, Attribute, Config, DataProvenance, InferenceOutcome,
    RawAttributes, INFERENCE_DISPLAY_MIN_CONFIDENCE,
};

use crate::external::ExternalPost;
use crate::inference::{ConservativeInferrer, TextToAttributeInferrer};
use crate::provenance::{build_provenance, ProvenanceParams};
use crate::sanitize::{sanitize, SanitizedText};
use crate::stance::{LexicalHintInferrer, StanceInferrer, StanceScore};

/// One external item after ingestion. Each ingestion gets a fresh `id`;
/// re-ingesting a post yields a new record rather than updating an old one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IngestedSignal {
    pub id: Uuid,
    pub post_url: Option<String>,
    pub author: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
    pub text: Option<SanitizedText>,
    /// Present only when there was text to score.
    pub stance: Option<StanceScore>,
    pub inference: InferenceOutcome,
    pub display_attributes: Vec<Attribute>,
    pub provenance: DataProvenance,
}

/// Sanitize → {stance, attribute inference} → provenance, for one item at
/// a time. Holds no per-item state, so one pipeline can serve any number of
/// concurrent callers.
#[derive(Clone)]
pub struct IngestPipeline {
    stance: Arc<dyn StanceInferrer>,
    attributes: Arc<dyn TextToAttributeInferrer>,
    allow_display: bool,
    min_display_confidence: f32,
}

impl Default for IngestPipeline {
    fn default() -> Self {
        Self {
            stance: Arc::new(LexicalHintInferrer::default()),
            attributes: Arc::new(ConservativeInferrer),
            allow_display: true,
            min_display_confidence: INFERENCE_DISPLAY_MIN_CONFIDENCE,
        }
    }
}

impl IngestPipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            allow_display: config.allow_display,
            min_display_confidence: config.min_inference_confidence,
            ..Self::default()
        }
    }

    pub fn with_stance_inferrer(mut self, inferrer: impl StanceInferrer + 'static) -> Self {
        self.stance = Arc::new(inferrer);
        self
    }

    pub fn with_attribute_inferrer(
        mut self,
        inferrer: impl TextToAttributeInferrer + 'static,
    ) -> Self {
        self.attributes = Arc::new(inferrer);
        self
    }

    /// Whether the source's terms allow showing its text at all.
    pub fn with_display_allowed(mut self, allowed: bool) -> Self {
        self.allow_display = allowed;
        self
    }

    /// Ingest one item. Never fails: missing or junk text degrades to an
    /// empty, hidden record.
    pub fn ingest(&self, post: &ExternalPost) -> IngestedSignal {
        let text = sanitize(post.text.as_deref());

        let (stance, inference, pii) = match &text {
            Some(t) => (
                Some(self.stance.infer(t)),
                self.attributes.infer(t),
                detect_pii(t),
            ),
            None => (None, InferenceOutcome::not_attempted(), Vec::new()),
        };

        if !pii.is_empty() {
            warn!(
                post_url = post.post_url.as_deref().unwrap_or(""),
                findings = ?pii,
                "PII in external text, hiding from display"
            );
        }

        let text_visible = self.allow_display && text.is_some() && pii.is_empty();

        let display_attributes = inference
            .inferred()
            .map(|inferred| {
                let raw = RawAttributes::from_inferences(inferred, self.min_display_confidence);
                map_attributes(Some(&raw))
            })
            .unwrap_or_default();

        let provenance = build_provenance(ProvenanceParams {
            fetched_at: post.fetched_at,
            query: post.query.clone(),
            confidence: inference.confidence(),
            text_visible,
        });

        debug!(
            post_url = post.post_url.as_deref().unwrap_or(""),
            stance = ?stance.map(|s| s.value()),
            text_visible,
            inference_attempted = inference.was_attempted(),
            "Ingested external post"
        );

        IngestedSignal {
            id: Uuid::new_v4(),
            post_url: post.post_url.clone(),
            author: post.author.clone(),
            posted_at: post.posted_at,
            text,
            stance,
            inference,
            display_attributes,
            provenance,
        }
    }

    /// Ingest many items. Items are independent; output order matches input.
    pub fn ingest_batch(&self, posts: &[ExternalPost]) -> Vec<IngestedSignal> {
        posts.iter().map(|post| self.ingest(post)).collect()
    }
}
