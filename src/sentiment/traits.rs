// Sentiment scorer trait.

use anyhow::Result;

/// Trait for scoring the polarity of a cleaned post.
pub trait SentimentScorer: Send + Sync {
    /// Compound polarity in [-1.0, 1.0]: negative is hostile, positive is
    /// friendly, 0.0 is neutral.
    fn polarity(&self, text: &str) -> Result<f64>;
}
