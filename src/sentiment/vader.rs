// VADER compound polarity via the `vader_sentiment` crate.

use anyhow::Result;
use vader_sentiment::SentimentIntensityAnalyzer;

use super::traits::SentimentScorer;

/// Local VADER scorer. The lexicon is compiled into the crate, so loading
/// is infallible and cheap.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn polarity(&self, text: &str) -> Result<f64> {
        if text.trim().is_empty() {
            return Ok(0.0);
        }
        let scores = self.analyzer.polarity_scores(text);
        let compound = scores.get("compound").copied().unwrap_or(0.0);
        Ok(compound.clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostile_text_is_negative() {
        let scorer = VaderScorer::new();
        let score = scorer
            .polarity("This is a horrible, disgusting and shameful act")
            .unwrap();
        assert!(score < -0.1, "Expected negative polarity, got {score}");
    }

    #[test]
    fn friendly_text_is_positive() {
        let scorer = VaderScorer::new();
        let score = scorer.polarity("What a wonderful, happy day!").unwrap();
        assert!(score > 0.1, "Expected positive polarity, got {score}");
    }

    #[test]
    fn empty_text_is_neutral() {
        let scorer = VaderScorer::new();
        assert_eq!(scorer.polarity("").unwrap(), 0.0);
    }
}
