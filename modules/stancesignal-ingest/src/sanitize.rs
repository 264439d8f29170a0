//! Normalization of untrusted external text into a bounded display string.

use std::fmt;
use std::ops::Deref;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use stancesignal_common::{MAX_DISPLAY_CHARS, TRUNCATION_MARKER};

/// External text after whitespace collapsing, trimming and truncation.
///
/// Never empty, never longer than [`MAX_DISPLAY_CHARS`] characters, no
/// leading, trailing or repeated whitespace. Only [`sanitize`] produces one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub struct SanitizedText(String);

impl SanitizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether the text sits at the bound and ends in the marker.
    ///
    /// Heuristic: source text that was exactly the bound long and already
    /// ended in `"..."` also reports `true`. The stored string can't tell the
    /// two apart.
    pub fn is_truncated(&self) -> bool {
        self.char_len() == MAX_DISPLAY_CHARS && self.0.ends_with(TRUNCATION_MARKER)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for SanitizedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SanitizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SanitizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SanitizedText> for String {
    fn from(text: SanitizedText) -> Self {
        text.0
    }
}

impl TryFrom<String> for SanitizedText {
    type Error = String;

    /// Accepts only strings that are already in sanitized form.
    fn try_from(raw: String) -> Result<Self, Self::Error> {
        match sanitize(Some(raw.as_str())) {
            Some(text) if text.0 == raw => Ok(text),
            _ => Err(format!("not sanitized text: {raw:?}")),
        }
    }
}

/// Normalize external text for display.
///
/// Whitespace runs (newlines included) collapse to one space and the ends
/// are trimmed. Text over the display bound keeps its first 277 characters
/// plus `"..."`. Absent or blank input yields `None`.
pub fn sanitize(text: Option<&str>) -> Option<SanitizedText> {
    let text = text?;
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return None;
    }

    let keep = MAX_DISPLAY_CHARS - TRUNCATION_MARKER.chars().count();
    match normalized.char_indices().nth(MAX_DISPLAY_CHARS) {
        None => Some(SanitizedText(normalized)),
        Some(_) => {
            let cut = normalized
                .char_indices()
                .nth(keep)
                .map(|(idx, _)| idx)
                .unwrap_or(normalized.len());
            let mut truncated = normalized[..cut].to_string();
            truncated.push_str(TRUNCATION_MARKER);
            Some(SanitizedText(truncated))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_blank_is_none() {
        assert_eq!(sanitize(None), None);
        assert_eq!(sanitize(Some("")), None);
        assert_eq!(sanitize(Some("   ")), None);
        assert_eq!(sanitize(Some("\n\t \u{3000}")), None);
    }

    #[test]
    fn collapses_whitespace_runs_and_trims() {
        let text = sanitize(Some("  hello \n\n  world\t!  ")).unwrap();
        assert_eq!(text.as_str(), "hello world !");
    }

    #[test]
    fn ideographic_space_counts_as_whitespace() {
        let text = sanitize(Some("賛成\u{3000}\u{3000}です")).unwrap();
        assert_eq!(text.as_str(), "賛成 です");
    }

    #[test]
    fn text_at_bound_is_unchanged() {
        let raw = "a".repeat(MAX_DISPLAY_CHARS);
        let text = sanitize(Some(raw.as_str())).unwrap();
        assert_eq!(text.as_str(), raw);
        assert!(!text.is_truncated());
    }

    #[test]
    fn text_over_bound_is_truncated_with_marker() {
        let raw = "a".repeat(MAX_DISPLAY_CHARS + 1);
        let text = sanitize(Some(raw.as_str())).unwrap();
        assert_eq!(text.char_len(), MAX_DISPLAY_CHARS);
        assert!(text.ends_with("..."));
        assert_eq!(&text[..277], "a".repeat(277));
        assert!(text.is_truncated());
    }

    #[test]
    fn source_ending_in_marker_at_bound_reads_as_truncated() {
        let raw = format!("{}...", "c".repeat(MAX_DISPLAY_CHARS - 3));
        let text = sanitize(Some(raw.as_str())).unwrap();
        assert_eq!(text.as_str(), raw);
        assert!(text.is_truncated());

        let short = sanitize(Some("wait for it...")).unwrap();
        assert!(!short.is_truncated());
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let raw = "政".repeat(300);
        let text = sanitize(Some(raw.as_str())).unwrap();
        assert_eq!(text.char_len(), MAX_DISPLAY_CHARS);
        assert!(text.starts_with(&"政".repeat(277)));
        assert!(text.ends_with("..."));
    }

    #[test]
    fn bound_applies_after_collapsing() {
        // 300 chars raw, 280 after collapsing the padding
        let raw = format!("{}{}", " ".repeat(20), "b".repeat(280));
        let text = sanitize(Some(raw.as_str())).unwrap();
        assert_eq!(text.as_str(), "b".repeat(280));
    }

    #[test]
    fn deserialize_rejects_unsanitized_strings() {
        assert!(serde_json::from_str::<SanitizedText>("\"ok text\"").is_ok());
        assert!(serde_json::from_str::<SanitizedText>("\" padded \"").is_err());
        assert!(serde_json::from_str::<SanitizedText>("\"\"").is_err());
    }
}
