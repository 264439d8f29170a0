use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// --- Attribute Types ---

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    Gender,
    AgeRange,
    Education,
    Occupation,
    PoliticalStance,
    PoliticalParty,
}

impl AttributeType {
    /// Canonical enumeration order.
    pub const ALL: [AttributeType; 6] = [
        AttributeType::Gender,
        AttributeType::AgeRange,
        AttributeType::Education,
        AttributeType::Occupation,
        AttributeType::PoliticalStance,
        AttributeType::PoliticalParty,
    ];

    /// Parse a raw record key. Keys outside the enumeration return `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "gender" => Some(AttributeType::Gender),
            "age_range" => Some(AttributeType::AgeRange),
            "education" => Some(AttributeType::Education),
            "occupation" => Some(AttributeType::Occupation),
            "political_stance" => Some(AttributeType::PoliticalStance),
            "political_party" => Some(AttributeType::PoliticalParty),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::Gender => "gender",
            AttributeType::AgeRange => "age_range",
            AttributeType::Education => "education",
            AttributeType::Occupation => "occupation",
            AttributeType::PoliticalStance => "political_stance",
            AttributeType::PoliticalParty => "political_party",
        }
    }
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A display-ready attribute: the type plus its catalog label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    pub value: String,
}

// --- Attribute Inference ---

/// One guessed demographic attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AttributeInference {
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    pub value: String,
    /// 0.0-1.0
    pub confidence: f32,
}

/// Result of running an attribute inferrer over a piece of text.
///
/// `inferred: None` means no inference was attempted (or possible);
/// `Some(vec![])` means inference ran and found nothing. `confidence` is
/// only ever present alongside a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InferenceOutcome {
    inferred: Option<Vec<AttributeInference>>,
    confidence: Option<f32>,
}

impl InferenceOutcome {
    pub fn not_attempted() -> Self {
        Self {
            inferred: None,
            confidence: None,
        }
    }

    /// Record an attempted inference. Duplicate attribute types after the
    /// first are dropped and all confidences are clamped to 0.0-1.0.
    pub fn attempted(inferences: Vec<AttributeInference>, confidence: f32) -> Self {
        let mut seen = Vec::with_capacity(inferences.len());
        let inferred = inferences
            .into_iter()
            .filter(|inf| {
                if seen.contains(&inf.attribute_type) {
                    false
                } else {
                    seen.push(inf.attribute_type);
                    true
                }
            })
            .map(|inf| AttributeInference {
                confidence: unit_interval(inf.confidence),
                ..inf
            })
            .collect();

        Self {
            inferred: Some(inferred),
            confidence: Some(unit_interval(confidence)),
        }
    }

    pub fn inferred(&self) -> Option<&[AttributeInference]> {
        self.inferred.as_deref()
    }

    pub fn confidence(&self) -> Option<f32> {
        self.confidence
    }

    pub fn was_attempted(&self) -> bool {
        self.inferred.is_some()
    }
}

fn unit_interval(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

// --- Provenance ---

/// Display and legal obligations attached to externally sourced content.
///
/// Attribution and a link back to the source are fixed policy for every
/// external record: they can't be constructed or deserialized as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "PolicyFlagsRecord")]
pub struct PolicyFlags {
    text_visible: bool,
    attribution_required: bool,
    external_link_required: bool,
}

/// Wire shape of [`PolicyFlags`], validated on the way in.
#[derive(Deserialize, JsonSchema)]
struct PolicyFlagsRecord {
    text_visible: bool,
    attribution_required: bool,
    external_link_required: bool,
}

impl TryFrom<PolicyFlagsRecord> for PolicyFlags {
    type Error = String;

    fn try_from(record: PolicyFlagsRecord) -> Result<Self, Self::Error> {
        if !record.attribution_required || !record.external_link_required {
            return Err(format!(
                "external content policy requires attribution and source link \
                 (attribution_required={}, external_link_required={})",
                record.attribution_required, record.external_link_required
            ));
        }
        Ok(PolicyFlags::new(record.text_visible))
    }
}

impl PolicyFlags {
    pub fn new(text_visible: bool) -> Self {
        Self {
            text_visible,
            attribution_required: true,
            external_link_required: true,
        }
    }

    /// Display code must check this before rendering any external text.
    pub fn text_visible(&self) -> bool {
        self.text_visible
    }

    pub fn attribution_required(&self) -> bool {
        self.attribution_required
    }

    pub fn external_link_required(&self) -> bool {
        self.external_link_required
    }
}

/// Where a piece of external data came from and what policy applies to it.
///
/// Records are never updated in place. Re-ingesting the same external item
/// produces a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DataProvenance {
    source: String,
    fetched_at: DateTime<Utc>,
    query: String,
    confidence: Option<f32>,
    policy_flags: PolicyFlags,
}

impl DataProvenance {
    pub fn new(
        source: impl Into<String>,
        fetched_at: DateTime<Utc>,
        query: impl Into<String>,
        confidence: Option<f32>,
        policy_flags: PolicyFlags,
    ) -> Self {
        Self {
            source: source.into(),
            fetched_at,
            query: query.into(),
            confidence,
            policy_flags,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Absent when no probabilistic claim feeds this record.
    pub fn confidence(&self) -> Option<f32> {
        self.confidence
    }

    pub fn policy_flags(&self) -> &PolicyFlags {
        &self.policy_flags
    }
}
