use regex::Regex;
use std::sync::LazyLock;

// `\b` is Unicode-aware and kana/kanji are word characters, so it never
// fires between Japanese text and an adjacent number or address. These
// guards only reject ASCII letters and digits next to a match.
const LEAD: &str = r"(?:^|[^\dA-Za-z])";
const TRAIL: &str = r"(?:$|[^\dA-Za-z])";

const PHONE: &str = r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}|0\d{1,4}-\d{1,4}-\d{4}";
const EMAIL: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";
const SSN: &str = r"\d{3}-\d{2}-\d{4}";
const MY_NUMBER: &str = r"\d{4}[\s-]\d{4}[\s-]\d{4}";
const STREET_ADDRESS: &str =
    r"\d{1,5}\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+(?:St|Ave|Blvd|Dr|Ln|Rd|Way|Ct|Pl|Cir|Ter)";
// 丁目/番地 blocks need no guard: the kanji delimit them.
const BLOCK_ADDRESS: &str = r"\d+丁目\d+(?:番地?|-)\d+";

fn guarded(core: &str) -> String {
    format!("{LEAD}(?:{core}){TRAIL}")
}

/// `(finding, pattern)` pairs, checked in order.
static PII_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        ("phone number detected", guarded(PHONE)),
        ("email address detected", guarded(EMAIL)),
        ("SSN pattern detected", guarded(SSN)),
        ("national ID number pattern detected", guarded(MY_NUMBER)),
        (
            "street address detected",
            format!("{}|{BLOCK_ADDRESS}", guarded(STREET_ADDRESS)),
        ),
    ]
    .into_iter()
    .map(|(finding, pattern)| (finding, Regex::new(&pattern).unwrap()))
    .collect()
});

/// Check if text contains PII patterns. Returns descriptions of what was found.
pub fn detect_pii(text: &str) -> Vec<String> {
    PII_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(finding, _)| finding.to_string())
        .collect()
}
