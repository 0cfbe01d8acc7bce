// Engagement counter and hashtag coercion.
//
// Scraped counters arrive as display text ("12", "", "1.2K") or numbers.
// Anything that doesn't parse as a plain number counts as zero.

use serde_json::Value;

/// Coerce a raw comment/repost counter to an integer.
///
/// Numbers and numeric strings are truncated toward zero; everything else
/// (garbage text, null, booleans, containers, non-finite values) is `0`.
/// Negative values pass through unchanged.
pub fn coerce_count(raw: &Value) -> i64 {
    match raw {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(truncate_finite))
            .unwrap_or(0),
        Value::String(s) => parse_count(s),
        _ => 0,
    }
}

/// Parse counter text, ignoring surrounding whitespace.
pub fn parse_count(text: &str) -> i64 {
    let text = text.trim();
    if let Ok(n) = text.parse::<i64>() {
        return n;
    }
    text.parse::<f64>().ok().and_then(truncate_finite).unwrap_or(0)
}

fn truncate_finite(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.trunc() as i64)
}

/// Flatten a hashtag list to its `", "`-joined form and count its pieces.
///
/// The count is the number of comma-separated pieces of the joined string,
/// so a tag that itself contains a comma counts twice. A missing list or one
/// that joins to the empty string counts zero.
pub fn flatten_hashtags(hashtags: Option<&[String]>) -> (String, u32) {
    let joined = hashtags.map(|tags| tags.join(", ")).unwrap_or_default();
    let count = if joined.is_empty() {
        0
    } else {
        joined.split(',').count() as u32
    };
    (joined, count)
}
