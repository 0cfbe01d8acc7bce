// Combined suspicion score.
//
// A fixed weighted sum of four signals:
//
//   keyword_score * 1.5
//   + |sentiment|          (only when sentiment < 0)
//   + 3                    (if engagement is anomalous)
//   + 2                    (if the author has more than 5 net-negative posts)
//
// The weights and thresholds are a compatibility contract: reports produced
// by different runs must be comparable, so the defaults must not drift.

/// Weights and thresholds for the suspicion formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuspicionWeights {
    /// Multiplier on the keyword risk score (default 1.5)
    pub keyword_weight: f64,
    /// Added when engagement is anomalous (default 3.0)
    pub engagement_penalty: f64,
    /// Added when the author's negative-post count exceeds `history_threshold` (default 2.0)
    pub history_penalty: f64,
    /// Negative-post count the author must exceed (default 5)
    pub history_threshold: u32,
}

impl Default for SuspicionWeights {
    fn default() -> Self {
        Self {
            keyword_weight: 1.5,
            engagement_penalty: 3.0,
            history_penalty: 2.0,
            history_threshold: 5,
        }
    }
}

/// Compute a post's suspicion score. Pure: the same inputs always give the
/// same score. Positive sentiment never lowers or raises the score.
pub fn compute_suspicion_score(
    keyword_score: u32,
    sentiment_score: f64,
    is_suspicious_engagement: bool,
    user_negative_post_count: u32,
    weights: &SuspicionWeights,
) -> f64 {
    let mut score = keyword_score as f64 * weights.keyword_weight;
    if sentiment_score < 0.0 {
        score += sentiment_score.abs();
    }
    if is_suspicious_engagement {
        score += weights.engagement_penalty;
    }
    if user_negative_post_count > weights.history_threshold {
        score += weights.history_penalty;
    }
    score
}
