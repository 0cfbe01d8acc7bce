// Phase 1: per-record enrichment.
//
// For every raw post: clean the text, detect/translate, split the author
// field, score sentiment, flatten hashtags, and coerce the engagement
// counters. Output order and cardinality match the input exactly.
//
// Translation is the only slow step, so localization runs as an ordered
// buffered stream: up to `concurrency` posts are in flight at once, and
// results come back in input order.

use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::language::adapter::{self, Localized, RetryPolicy, LANGUAGE_ENGLISH};
use crate::language::traits::{LanguageDetector, Translator};
use crate::models::{EnrichedPost, RawPost, UNKNOWN_USERNAME};
use crate::sentiment::traits::SentimentScorer;
use crate::text::author::parse_author;
use crate::text::metrics::{coerce_count, flatten_hashtags};
use crate::text::normalize::clean_post_text;

/// The external services and knobs phase 1 runs with.
pub struct Enricher<'a> {
    pub detector: &'a dyn LanguageDetector,
    pub translator: &'a dyn Translator,
    pub sentiment: &'a dyn SentimentScorer,
    pub retry: RetryPolicy,
    /// Maximum posts localized concurrently (minimum 1)
    pub concurrency: usize,
}

/// Counters describing how enrichment went, for the run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichStats {
    /// Posts whose text was replaced by a translation
    pub translated: usize,
    /// Non-English posts that kept their original text
    pub untranslated: usize,
    /// Posts with language `unknown` or `error`
    pub undetected: usize,
    /// Posts whose author field had no handle line
    pub unknown_authors: usize,
}

impl Enricher<'_> {
    /// Enrich a whole batch. Never fails: every per-record problem degrades
    /// to a default value.
    pub async fn enrich_batch(&self, posts: &[RawPost]) -> (Vec<EnrichedPost>, EnrichStats) {
        let cleaned: Vec<String> = posts.iter().map(|p| clean_post_text(&p.content)).collect();

        let pb = ProgressBar::new(posts.len() as u64);
        if let Ok(style) =
            ProgressStyle::default_bar().template("  Localizing [{bar:30}] {pos}/{len} ({eta})")
        {
            pb.set_style(style);
        }

        let localized: Vec<Localized> = stream::iter(cleaned.iter().map(|text| {
            adapter::localize(text, self.detector, self.translator, &self.retry)
        }))
        .buffered(self.concurrency.max(1))
        .inspect(|_| pb.inc(1))
        .collect()
        .await;

        pb.finish_and_clear();

        let mut stats = EnrichStats::default();
        let enriched: Vec<EnrichedPost> = posts
            .iter()
            .zip(localized)
            .map(|(raw, localized)| {
                stats.record(&localized);
                let post = self.enrich_post(raw, localized);
                if post.username == UNKNOWN_USERNAME {
                    stats.unknown_authors += 1;
                }
                post
            })
            .collect();

        info!(
            posts = enriched.len(),
            translated = stats.translated,
            untranslated = stats.untranslated,
            undetected = stats.undetected,
            unknown_authors = stats.unknown_authors,
            "Enrichment complete"
        );

        (enriched, stats)
    }

    /// Assemble one enriched post from its raw record and localized text.
    pub fn enrich_post(&self, raw: &RawPost, localized: Localized) -> EnrichedPost {
        let author = parse_author(&raw.author);
        let sentiment_score = match self.sentiment.polarity(&localized.text) {
            Ok(score) => score,
            Err(e) => {
                warn!(username = author.username.as_str(), error = %e, "Sentiment scoring failed, using neutral score");
                0.0
            }
        };
        let (hashtags, hashtag_count) = flatten_hashtags(raw.hashtags.as_deref());

        EnrichedPost {
            username: author.username,
            display_name: author.display_name,
            cleaned_content: localized.text,
            sentiment_score,
            comments: coerce_count(&raw.comments),
            reposts: coerce_count(&raw.reposts),
            language: localized.language,
            hashtags,
            hashtag_count,
            search_query: raw.search_query.clone(),
            original_content: raw.content.clone(),
        }
    }
}

impl EnrichStats {
    fn record(&mut self, localized: &Localized) {
        match localized.language.as_str() {
            adapter::LANGUAGE_UNKNOWN | adapter::LANGUAGE_ERROR => self.undetected += 1,
            LANGUAGE_ENGLISH => {}
            _ if localized.translated => self.translated += 1,
            _ => self.untranslated += 1,
        }
    }
}
