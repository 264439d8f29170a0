//! Demographic attribute inference from text.
//!
//! The default inferrer never guesses. Real models plug in behind
//! [`TextToAttributeInferrer`] without touching callers.

use stancesignal_common::InferenceOutcome;

/// Text → attribute guesses with confidence.
///
/// Implementations must be total: any input, including an empty string,
/// yields an outcome. Return [`InferenceOutcome::not_attempted`] rather than
/// failing.
pub trait TextToAttributeInferrer: Send + Sync {
    fn infer(&self, text: &str) -> InferenceOutcome;
}

/// Makes no demographic claims about anyone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConservativeInferrer;

impl TextToAttributeInferrer for ConservativeInferrer {
    fn infer(&self, _text: &str) -> InferenceOutcome {
        InferenceOutcome::not_attempted()
    }
}

/// Run the default inferrer.
pub fn infer_attributes(text: &str) -> InferenceOutcome {
    ConservativeInferrer.infer(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inferrer_never_asserts_anything() {
        let long = "政策".repeat(200);
        for text in ["", " ", "この政策には賛成です", "私は30代の女性です", long.as_str()] {
            let outcome = infer_attributes(text);
            assert_eq!(outcome, InferenceOutcome::not_attempted());
            assert!(outcome.inferred().is_none());
            assert!(outcome.confidence().is_none());
        }
    }
}
