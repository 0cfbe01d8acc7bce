// Per-author negative post history: the batch-wide aggregate.
//
// Counts, per username, how many posts in the batch score as net-negative.
// Built in one pass over the whole batch after sentiment is known for every
// post; each post then looks up its author's count.

use std::collections::HashMap;

use crate::models::EnrichedPost;

/// Sentiment strictly below this counts as net-negative.
pub const NEGATIVE_SENTIMENT_THRESHOLD: f64 = -0.1;

/// Negative-post counts keyed by username.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NegativeHistory {
    counts: HashMap<String, u32>,
}

impl NegativeHistory {
    /// Aggregate over the whole batch.
    pub fn from_posts(posts: &[EnrichedPost]) -> Self {
        Self::from_pairs(
            posts
                .iter()
                .map(|p| (p.username.as_str(), p.sentiment_score)),
        )
    }

    /// Aggregate from (username, sentiment) pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for (username, sentiment) in pairs {
            if is_net_negative(sentiment) {
                *counts.entry(username.to_string()).or_default() += 1;
            }
        }
        Self { counts }
    }

    /// Number of net-negative posts by `username` (0 if none).
    pub fn count_for(&self, username: &str) -> u32 {
        self.counts.get(username).copied().unwrap_or(0)
    }

    /// Number of authors with at least one net-negative post.
    pub fn author_count(&self) -> usize {
        self.counts.len()
    }
}

pub fn is_net_negative(sentiment: f64) -> bool {
    sentiment < NEGATIVE_SENTIMENT_THRESHOLD
}
