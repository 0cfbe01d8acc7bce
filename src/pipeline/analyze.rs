// Phase 2: batch aggregate, then per-post scoring.
//
// The negative-history aggregate needs every post's sentiment, so it is
// built from the complete batch before any suspicion score is computed.

use tracing::info;

use crate::models::{EnrichedPost, PostSignals, ScoredPost};
use crate::scoring::engagement::assess_engagement;
use crate::scoring::history::NegativeHistory;
use crate::scoring::keywords::KeywordLexicon;
use crate::scoring::suspicion::{compute_suspicion_score, SuspicionWeights};

/// The fixed scoring configuration for a run.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    pub lexicon: KeywordLexicon,
    pub weights: SuspicionWeights,
}

impl Analyzer {
    /// Score every post in the batch. Output is in input order.
    pub fn score_batch(&self, posts: Vec<EnrichedPost>) -> Vec<ScoredPost> {
        let history = NegativeHistory::from_posts(&posts);
        info!(
            posts = posts.len(),
            negative_authors = history.author_count(),
            "Built negative-post history"
        );

        posts
            .into_iter()
            .map(|post| {
                let signals = self.score_post(&post, &history);
                ScoredPost::from_enriched(post, signals)
            })
            .collect()
    }

    /// Compute one post's signals against the batch history.
    pub fn score_post(&self, post: &EnrichedPost, history: &NegativeHistory) -> PostSignals {
        let keyword_score = self.lexicon.score(&post.cleaned_content);
        let engagement = assess_engagement(post.comments, post.reposts);
        let user_negative_post_count = history.count_for(&post.username);
        let suspicion_score = compute_suspicion_score(
            keyword_score,
            post.sentiment_score,
            engagement.is_suspicious,
            user_negative_post_count,
            &self.weights,
        );

        PostSignals {
            keyword_score,
            repost_to_comment_ratio: engagement.repost_to_comment_ratio,
            is_suspicious_engagement: engagement.is_suspicious,
            user_negative_post_count,
            suspicion_score,
        }
    }
}
