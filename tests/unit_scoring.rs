// Unit tests for the scoring phase.
//
// Keyword lexicon, engagement anomaly, negative history, the suspicion
// formula, and report ranking. All pure functions, no I/O.

use campaign_radar::models::{EnrichedPost, PostSignals, ScoredPost};
use campaign_radar::output::report::{
    build_reports, keyword_hits, rank_posts, rank_users, USER_REPORT_LIMIT,
};
use campaign_radar::pipeline::analyze::Analyzer;
use campaign_radar::scoring::engagement::{assess_engagement, repost_to_comment_ratio};
use campaign_radar::scoring::history::NegativeHistory;
use campaign_radar::scoring::keywords::KeywordLexicon;
use campaign_radar::scoring::suspicion::{compute_suspicion_score, SuspicionWeights};

fn enriched(username: &str, content: &str, sentiment: f64) -> EnrichedPost {
    EnrichedPost {
        username: username.to_string(),
        display_name: username.to_uppercase(),
        cleaned_content: content.to_string(),
        sentiment_score: sentiment,
        comments: 0,
        reposts: 0,
        language: "en".to_string(),
        hashtags: String::new(),
        hashtag_count: 0,
        search_query: String::new(),
        original_content: content.to_string(),
    }
}

fn scored(username: &str, score: f64) -> ScoredPost {
    ScoredPost::from_enriched(
        enriched(username, "", 0.0),
        PostSignals {
            keyword_score: 0,
            repost_to_comment_ratio: 0.0,
            is_suspicious_engagement: false,
            user_negative_post_count: 0,
            suspicion_score: score,
        },
    )
}

// ============================================================
// Keywords
// ============================================================

#[test]
fn keyword_lexicon_has_sixteen_entries() {
    assert_eq!(KeywordLexicon::default().len(), 16);
}

#[test]
fn keyword_score_sums_matched_weights() {
    let lexicon = KeywordLexicon::default();
    assert_eq!(lexicon.score("This is GENOCIDE by a fascist regime"), 6);
    assert_eq!(lexicon.score("nothing to see here"), 0);
}

#[test]
fn keyword_matches_substrings() {
    let lexicon = KeywordLexicon::default();
    // "fail" hits inside "failure"
    assert_eq!(lexicon.score("Terrorist failure"), 3);
}

#[test]
fn keyword_counted_once_per_post() {
    let lexicon = KeywordLexicon::default();
    assert_eq!(lexicon.score("boycott boycott boycott"), 1);
}

#[test]
fn custom_lexicon() {
    let lexicon = KeywordLexicon::new([("spam", 4), ("bot", 1)]);
    assert_eq!(lexicon.score("Spam from a BOT"), 5);
    assert_eq!(lexicon.matches("spam from a bot"), vec!["spam", "bot"]);
}

// ============================================================
// Engagement
// ============================================================

#[test]
fn engagement_spec_examples() {
    let heavy = assess_engagement(0, 300);
    assert_eq!(heavy.repost_to_comment_ratio, 300.0);
    assert!(heavy.is_suspicious);

    let small = assess_engagement(0, 10);
    assert_eq!(small.repost_to_comment_ratio, 10.0);
    assert!(!small.is_suspicious);

    let no_comments = assess_engagement(0, 15);
    assert_eq!(no_comments.repost_to_comment_ratio, 15.0);
    assert!(!no_comments.is_suspicious);

    let flagged = assess_engagement(2, 100);
    assert!(flagged.repost_to_comment_ratio > 33.3);
    assert!(flagged.is_suspicious);

    let balanced = assess_engagement(9, 100);
    assert_eq!(balanced.repost_to_comment_ratio, 10.0);
    assert!(!balanced.is_suspicious);
}

#[test]
fn engagement_ratio_exactly_twenty_is_not_suspicious() {
    let signal = assess_engagement(1, 40);
    assert_eq!(signal.repost_to_comment_ratio, 20.0);
    assert!(!signal.is_suspicious);
}

#[test]
fn ratio_with_no_engagement_is_zero() {
    assert_eq!(repost_to_comment_ratio(0, 0), 0.0);
}

// ============================================================
// Negative history
// ============================================================

#[test]
fn history_counts_only_below_threshold() {
    let posts = vec![
        enriched("a", "", -0.5),
        enriched("a", "", -0.1),
        enriched("a", "", -0.11),
        enriched("b", "", 0.9),
    ];
    let history = NegativeHistory::from_posts(&posts);
    assert_eq!(history.count_for("a"), 2);
    assert_eq!(history.count_for("b"), 0);
    assert_eq!(history.count_for("nobody"), 0);
    assert_eq!(history.author_count(), 1);
}

// ============================================================
// Suspicion score
// ============================================================

#[test]
fn suspicion_spec_example() {
    let score = compute_suspicion_score(6, -0.8, true, 7, &SuspicionWeights::default());
    assert!((score - 14.8).abs() < 1e-9);
}

#[test]
fn suspicion_ignores_positive_sentiment() {
    let weights = SuspicionWeights::default();
    assert_eq!(compute_suspicion_score(2, 0.9, false, 0, &weights), 3.0);
    assert_eq!(compute_suspicion_score(0, 0.0, false, 5, &weights), 0.0);
}

#[test]
fn suspicion_is_deterministic() {
    let weights = SuspicionWeights::default();
    let first = compute_suspicion_score(3, -0.42, true, 6, &weights);
    for _ in 0..10 {
        assert_eq!(compute_suspicion_score(3, -0.42, true, 6, &weights), first);
    }
}

#[test]
fn analyzer_applies_history_to_every_post_of_author() {
    let mut posts: Vec<EnrichedPost> = (0..6).map(|_| enriched("angry", "bad day", -0.5)).collect();
    posts.push(enriched("angry", "lovely day", 0.8));
    posts.push(enriched("calm", "fine", -0.5));

    let scored = Analyzer::default().score_batch(posts);
    assert_eq!(scored.len(), 8);
    for post in &scored[..6] {
        assert_eq!(post.user_negative_post_count, 6);
        assert!((post.suspicion_score - 2.5).abs() < 1e-9);
    }
    // Positive post still gets the author penalty
    assert_eq!(scored[6].suspicion_score, 2.0);
    assert_eq!(scored[7].user_negative_post_count, 1);
    assert!((scored[7].suspicion_score - 0.5).abs() < 1e-9);
}

// ============================================================
// Reports
// ============================================================

#[test]
fn posts_sorted_descending_with_stable_ties() {
    let ranked = rank_posts(vec![
        scored("first", 1.0),
        scored("top", 9.0),
        scored("second", 1.0),
        scored("zero", 0.0),
    ]);
    let names: Vec<&str> = ranked.iter().map(|p| p.username.as_str()).collect();
    assert_eq!(names, vec!["top", "first", "second", "zero"]);
}

#[test]
fn users_summed_and_ranked() {
    let posts = vec![
        scored("a", 1.0),
        scored("b", 5.0),
        scored("a", 3.0),
        scored("c", 0.5),
    ];
    let users = rank_users(&posts, USER_REPORT_LIMIT);
    assert_eq!(users.len(), 3);
    assert_eq!(users[0].username, "b");
    assert_eq!(users[0].total_suspicion_score, 5.0);
    assert_eq!(users[1].username, "a");
    assert_eq!(users[1].total_suspicion_score, 4.0);
    assert_eq!(users[2].username, "c");
}

#[test]
fn tied_user_totals_follow_username_order() {
    let posts = rank_posts(vec![scored("zed", 2.0), scored("amy", 2.0), scored("bob", 1.0)]);
    let users = rank_users(&posts, USER_REPORT_LIMIT);
    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["amy", "zed", "bob"]);
}

#[test]
fn tie_at_cutoff_keeps_earlier_username() {
    let posts: Vec<ScoredPost> = (0..21).rev().map(|i| scored(&format!("user{i:02}"), 1.0)).collect();
    let users = rank_users(&posts, USER_REPORT_LIMIT);
    assert_eq!(users.len(), 20);
    assert_eq!(users[0].username, "user00");
    assert_eq!(users[19].username, "user19");
}

#[test]
fn user_report_capped_at_twenty() {
    let posts: Vec<ScoredPost> = (0..25).map(|i| scored(&format!("user{i:02}"), i as f64)).collect();
    let reports = build_reports(posts);
    assert_eq!(reports.posts.len(), 25);
    assert_eq!(reports.users.len(), 20);
    assert_eq!(reports.users[0].username, "user24");
    assert_eq!(reports.users[19].username, "user05");
}

#[test]
fn empty_batch_gives_empty_reports() {
    let reports = build_reports(Vec::new());
    assert!(reports.posts.is_empty());
    assert!(reports.users.is_empty());
}

#[test]
fn keyword_hits_count_posts_per_keyword() {
    let lexicon = KeywordLexicon::default();
    let posts: Vec<ScoredPost> = ["boycott the siege", "siege again, siege", "shame", "calm day"]
        .iter()
        .map(|text| {
            let mut post = scored("u", 0.0);
            post.cleaned_content = text.to_string();
            post
        })
        .collect();

    let hits = keyword_hits(&posts, &lexicon);
    assert_eq!(hits, vec![("siege", 2), ("boycott", 1), ("shame", 1)]);
}
