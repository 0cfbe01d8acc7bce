// Data models: the records that flow through the analysis pipeline.
//
// A batch is widened in stages: RawPost (scraper output) -> EnrichedPost
// (phase 1, also the staging row) -> ScoredPost (phase 2, also the post
// report row). UserAggregate is the user report row.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Sentinel handle used when the author field has no second line.
pub const UNKNOWN_USERNAME: &str = "unknown";

/// A post exactly as the scraper wrote it.
///
/// Every field is optional on the wire: the scraper writes whatever it could
/// pull out of the page, so missing or mistyped fields fall back to empty
/// values instead of rejecting the record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPost {
    /// Display name and handle separated by a newline.
    #[serde(default, deserialize_with = "lenient_string")]
    pub author: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
    /// `None` when the field was present but not an array.
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub hashtags: Option<Vec<String>>,
    /// Counter text as scraped ("12", "1.2K", "") or a JSON number.
    #[serde(default)]
    pub comments: Value,
    #[serde(default)]
    pub reposts: Value,
    #[serde(default, deserialize_with = "lenient_string")]
    pub search_query: String,
}

/// A post after per-record enrichment (phase 1).
///
/// This is also the row type of the staging table written between the two
/// phases. The first six columns are the ones the scoring phase needs; the
/// rest default when reading a minimal staging file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedPost {
    pub username: String,
    pub display_name: String,
    pub cleaned_content: String,
    pub sentiment_score: f64,
    pub comments: i64,
    pub reposts: i64,
    #[serde(default = "unknown_language")]
    pub language: String,
    #[serde(default)]
    pub hashtags: String,
    #[serde(default)]
    pub hashtag_count: u32,
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub original_content: String,
}

/// Signals computed in phase 2 for a single post.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostSignals {
    pub keyword_score: u32,
    pub repost_to_comment_ratio: f64,
    pub is_suspicious_engagement: bool,
    pub user_negative_post_count: u32,
    pub suspicion_score: f64,
}

/// A fully scored post: one row of the post report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPost {
    pub username: String,
    pub display_name: String,
    pub cleaned_content: String,
    pub sentiment_score: f64,
    pub comments: i64,
    pub reposts: i64,
    pub language: String,
    pub hashtags: String,
    pub hashtag_count: u32,
    pub search_query: String,
    pub original_content: String,
    pub keyword_score: u32,
    pub repost_to_comment_ratio: f64,
    pub is_suspicious_engagement: bool,
    pub user_negative_post_count: u32,
    pub suspicion_score: f64,
}

impl ScoredPost {
    /// Widen an enriched post with its phase-2 signals.
    pub fn from_enriched(post: EnrichedPost, signals: PostSignals) -> Self {
        Self {
            username: post.username,
            display_name: post.display_name,
            cleaned_content: post.cleaned_content,
            sentiment_score: post.sentiment_score,
            comments: post.comments,
            reposts: post.reposts,
            language: post.language,
            hashtags: post.hashtags,
            hashtag_count: post.hashtag_count,
            search_query: post.search_query,
            original_content: post.original_content,
            keyword_score: signals.keyword_score,
            repost_to_comment_ratio: signals.repost_to_comment_ratio,
            is_suspicious_engagement: signals.is_suspicious_engagement,
            user_negative_post_count: signals.user_negative_post_count,
            suspicion_score: signals.suspicion_score,
        }
    }
}

/// One row of the user report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAggregate {
    pub username: String,
    pub total_suspicion_score: f64,
}

fn unknown_language() -> String {
    "unknown".to_string()
}

/// Accept any JSON value where a string is expected: strings pass through,
/// numbers and booleans are rendered, null and containers become "".
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Accept an array of strings; anything that isn't an array becomes `None`.
/// Non-string array elements are rendered like `lenient_string` does.
fn lenient_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                })
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_post_tolerates_missing_and_mistyped_fields() {
        let post: RawPost =
            serde_json::from_str(r#"{"author": null, "hashtags": "oops", "comments": 3}"#)
                .unwrap();
        assert_eq!(post.author, "");
        assert_eq!(post.content, "");
        assert!(post.hashtags.is_none());
        assert_eq!(post.comments, Value::from(3));
        assert_eq!(post.reposts, Value::Null);
    }

    #[test]
    fn raw_post_reads_scraper_shape() {
        let json = r##"{
            "author": "Jane Doe\n@jane123",
            "content": "Hello #world",
            "hashtags": ["#world"],
            "comments": "4",
            "reposts": "12",
            "search_query": "#world"
        }"##;
        let post: RawPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.author, "Jane Doe\n@jane123");
        assert_eq!(post.hashtags, Some(vec!["#world".to_string()]));
        assert_eq!(post.reposts, Value::from("12"));
        assert_eq!(post.search_query, "#world");
    }
}
