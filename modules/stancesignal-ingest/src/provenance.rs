use chrono::{DateTime, Utc};
use stancesignal_common::{DataProvenance, PolicyFlags};

/// Provenance source for content scraped from X.
pub const EXTERNAL_SOURCE: &str = "x";

/// Inputs to [`build_provenance`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProvenanceParams {
    pub fetched_at: DateTime<Utc>,
    pub query: String,
    pub confidence: Option<f32>,
    /// Decided by the caller; may depend on licensing or moderation outside
    /// this pipeline.
    pub text_visible: bool,
}

/// Assemble the provenance record for one externally sourced item.
///
/// Attribution and a link back to the source are always required for this
/// source; only visibility comes from the caller.
pub fn build_provenance(params: ProvenanceParams) -> DataProvenance {
    let ProvenanceParams {
        fetched_at,
        query,
        confidence,
        text_visible,
    } = params;

    DataProvenance::new(
        EXTERNAL_SOURCE,
        fetched_at,
        query,
        confidence,
        PolicyFlags::new(text_visible),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(text_visible: bool, confidence: Option<f32>) -> ProvenanceParams {
        ProvenanceParams {
            fetched_at: "2026-03-01T12:00:00Z".parse().unwrap(),
            query: "policy theme X".to_string(),
            confidence,
            text_visible,
        }
    }

    #[test]
    fn copies_inputs_verbatim() {
        let p = params(true, Some(0.42));
        let provenance = build_provenance(p.clone());
        assert_eq!(provenance.source(), EXTERNAL_SOURCE);
        assert_eq!(provenance.fetched_at(), p.fetched_at);
        assert_eq!(provenance.query(), "policy theme X");
        assert_eq!(provenance.confidence(), Some(0.42));
    }

    #[test]
    fn absent_confidence_stays_absent() {
        assert_eq!(build_provenance(params(true, None)).confidence(), None);
    }

    #[test]
    fn attribution_and_link_always_required() {
        for visible in [true, false] {
            for confidence in [None, Some(0.0), Some(1.0)] {
                let provenance = build_provenance(params(visible, confidence));
                let flags = provenance.policy_flags();
                assert!(flags.attribution_required());
                assert!(flags.external_link_required());
                assert_eq!(flags.text_visible(), visible);
            }
        }
    }
}
