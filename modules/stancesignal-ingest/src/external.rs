use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An item fetched from outside the platform, as handed to the pipeline.
/// Fetchers have already dealt with auth, rate limits and pagination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalPost {
    pub text: Option<String>,
    pub fetched_at: DateTime<Utc>,
    pub query: String,
    pub post_url: Option<String>,
    pub author: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
}

impl ExternalPost {
    pub fn new(text: Option<String>, fetched_at: DateTime<Utc>, query: impl Into<String>) -> Self {
        Self {
            text,
            fetched_at,
            query: query.into(),
            post_url: None,
            author: None,
            posted_at: None,
        }
    }
}

// --- X dataset export types ---

/// Author info nested inside a Tweet.
#[derive(Debug, Clone, Deserialize)]
pub struct TweetAuthor {
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
    pub name: Option<String>,
}

/// A single tweet from a scraper dataset export.
#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    pub id: Option<String>,
    pub text: Option<String>,
    pub full_text: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "createdAt", alias = "created_at")]
    pub created_at: Option<String>,
    pub author: Option<TweetAuthor>,
}

impl Tweet {
    /// Returns whichever text field is populated, preferring `full_text`.
    pub fn content(&self) -> Option<&str> {
        self.full_text.as_deref().or(self.text.as_deref())
    }

    /// Parse `created_at`, which X emits as `Wed Oct 10 20:19:24 +0000 2018`
    /// and some exporters rewrite to RFC 3339.
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.as_deref()?;
        DateTime::parse_from_str(raw, "%a %b %d %H:%M:%S %z %Y")
            .or_else(|_| DateTime::parse_from_rfc3339(raw))
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Convert into a pipeline input stamped with fetch time and query.
    pub fn into_external(self, fetched_at: DateTime<Utc>, query: &str) -> ExternalPost {
        let posted_at = self.posted_at();
        let text = self.content().map(str::to_string);
        let author = self.author.and_then(|a| a.user_name);
        let post_url = self.url.or_else(|| {
            match (author.as_deref(), self.id.as_deref()) {
                (Some(user), Some(id)) => Some(format!("https://x.com/{user}/status/{id}")),
                _ => None,
            }
        });

        ExternalPost {
            text,
            fetched_at,
            query: query.to_string(),
            post_url,
            author,
            posted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fetched() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn prefers_full_text() {
        let tweet: Tweet = serde_json::from_str(
            r#"{"id": "1", "text": "short", "full_text": "the full text"}"#,
        )
        .unwrap();
        assert_eq!(tweet.content(), Some("the full text"));
    }

    #[test]
    fn parses_x_timestamp_format() {
        let tweet: Tweet =
            serde_json::from_str(r#"{"createdAt": "Wed Oct 10 20:19:24 +0000 2018"}"#).unwrap();
        assert_eq!(
            tweet.posted_at(),
            Some(Utc.with_ymd_and_hms(2018, 10, 10, 20, 19, 24).unwrap())
        );
    }

    #[test]
    fn parses_rfc3339_timestamp() {
        let tweet: Tweet =
            serde_json::from_str(r#"{"created_at": "2025-12-24T09:00:00+09:00"}"#).unwrap();
        assert_eq!(
            tweet.posted_at(),
            Some(Utc.with_ymd_and_hms(2025, 12, 24, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn unparseable_timestamp_is_none() {
        let tweet: Tweet = serde_json::from_str(r#"{"createdAt": "yesterday"}"#).unwrap();
        assert_eq!(tweet.posted_at(), None);
    }

    #[test]
    fn builds_status_url_when_missing() {
        let tweet: Tweet = serde_json::from_str(
            r#"{"id": "42", "text": "hi", "author": {"userName": "citizen", "name": "C"}}"#,
        )
        .unwrap();
        let post = tweet.into_external(fetched(), "q");
        assert_eq!(post.post_url.as_deref(), Some("https://x.com/citizen/status/42"));
        assert_eq!(post.author.as_deref(), Some("citizen"));
        assert_eq!(post.text.as_deref(), Some("hi"));
        assert_eq!(post.query, "q");
        assert_eq!(post.fetched_at, fetched());
    }

    #[test]
    fn tweet_without_text_keeps_none() {
        let tweet: Tweet = serde_json::from_str(r#"{"id": "7"}"#).unwrap();
        let post = tweet.into_external(fetched(), "q");
        assert_eq!(post.text, None);
        assert_eq!(post.post_url, None);
    }
}
