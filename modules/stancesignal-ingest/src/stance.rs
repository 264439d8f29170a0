//! Lexical stance heuristic.
//!
//! Scores how supportive a text reads toward the policy it discusses, on a
//! 0-100 scale with 50 as the neutral prior. Callers depend on the
//! text → bounded score contract, not on the hint lists, which are
//! placeholders meant to be replaced.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use stancesignal_common::{STANCE_HINT_WEIGHT, STANCE_MAX, STANCE_NEUTRAL};

/// Tokens signaling support.
pub const POSITIVE_HINTS: &[&str] = &["賛成", "支持", "良い", "期待", "推進", "必要"];

/// Tokens signaling opposition.
pub const NEGATIVE_HINTS: &[&str] = &["反対", "不要", "懸念", "問題", "廃止", "悪い"];

/// Stance score in 0-100. Out-of-range values cannot be constructed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct StanceScore(u8);

impl StanceScore {
    pub const NEUTRAL: StanceScore = StanceScore(STANCE_NEUTRAL);

    /// Clamp a raw accumulated score into range.
    pub fn clamped(raw: i32) -> Self {
        StanceScore(raw.clamp(0, STANCE_MAX as i32) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for StanceScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<StanceScore> for i32 {
    fn from(score: StanceScore) -> Self {
        score.0 as i32
    }
}

impl TryFrom<i32> for StanceScore {
    type Error = String;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        if (0..=STANCE_MAX as i32).contains(&raw) {
            Ok(StanceScore(raw as u8))
        } else {
            Err(format!("stance score out of range: {raw}"))
        }
    }
}

impl std::fmt::Display for StanceScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Text → stance score. Implementations must be total and deterministic.
pub trait StanceInferrer: Send + Sync {
    fn infer(&self, text: &str) -> StanceScore;
}

/// Adds a fixed weight per positive hint present and subtracts it per
/// negative hint present, then clamps once. Presence is counted, not
/// occurrences: a hint repeated in the text still moves the score once.
#[derive(Debug, Clone)]
pub struct LexicalHintInferrer {
    positive: &'static [&'static str],
    negative: &'static [&'static str],
    weight: i32,
}

impl LexicalHintInferrer {
    pub fn new(
        positive: &'static [&'static str],
        negative: &'static [&'static str],
        weight: i32,
    ) -> Self {
        Self {
            positive,
            negative,
            weight,
        }
    }
}

impl Default for LexicalHintInferrer {
    fn default() -> Self {
        Self::new(POSITIVE_HINTS, NEGATIVE_HINTS, STANCE_HINT_WEIGHT)
    }
}

impl StanceInferrer for LexicalHintInferrer {
    fn infer(&self, text: &str) -> StanceScore {
        let hits = |hints: &[&str]| hints.iter().filter(|h| text.contains(**h)).count() as i32;

        // Sum everything before clamping so early saturation can't swallow
        // opposing hints.
        let raw = STANCE_NEUTRAL as i32
            + self.weight * hits(self.positive)
            - self.weight * hits(self.negative);
        StanceScore::clamped(raw)
    }
}

/// Score text with the default lexical hints.
pub fn infer_stance(text: &str) -> StanceScore {
    LexicalHintInferrer::default().infer(text)
}
