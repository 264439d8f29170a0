use std::env;

use crate::error::StanceSignalError;
use crate::quality::INFERENCE_DISPLAY_MIN_CONFIDENCE;

/// Ingestion configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Whether the external source's terms allow displaying its text.
    pub allow_display: bool,
    /// Inferred attributes below this confidence are not displayed.
    pub min_inference_confidence: f32,
    /// Query recorded on provenance when the caller supplies none.
    pub default_query: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_display: true,
            min_inference_confidence: INFERENCE_DISPLAY_MIN_CONFIDENCE,
            default_query: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables. Unset variables fall
    /// back to defaults; malformed ones are an error.
    pub fn from_env() -> Result<Self, StanceSignalError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StanceSignalError> {
        let defaults = Self::default();

        let allow_display = match lookup("INGEST_ALLOW_DISPLAY") {
            Some(raw) => parse_bool("INGEST_ALLOW_DISPLAY", &raw)?,
            None => defaults.allow_display,
        };

        let min_inference_confidence = match lookup("INGEST_MIN_INFERENCE_CONFIDENCE") {
            Some(raw) => {
                let value: f32 = raw.trim().parse().map_err(|_| {
                    StanceSignalError::Config(format!(
                        "INGEST_MIN_INFERENCE_CONFIDENCE must be a number, got {raw:?}"
                    ))
                })?;
                if !(0.0..=1.0).contains(&value) {
                    return Err(StanceSignalError::Config(format!(
                        "INGEST_MIN_INFERENCE_CONFIDENCE must be within 0.0-1.0, got {value}"
                    )));
                }
                value
            }
            None => defaults.min_inference_confidence,
        };

        let default_query = lookup("INGEST_QUERY")
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());

        Ok(Self {
            allow_display,
            min_inference_confidence,
            default_query,
        })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, StanceSignalError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(StanceSignalError::Config(format!(
            "{key} must be a boolean, got {raw:?}"
        ))),
    }
}
