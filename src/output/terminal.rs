// Colored terminal output for ranked posts, users, and run summaries.
//
// This module handles all terminal-specific formatting: colors and tables.
// main.rs delegates here after a run or when showing a saved report.

use colored::Colorize;

use crate::models::{ScoredPost, UserAggregate};
use crate::pipeline::enrich::EnrichStats;
use crate::reports::ReportEntry;
use crate::scoring::keywords::KeywordLexicon;

use super::report::keyword_hits;

/// Display the top of the ranked post list.
pub fn display_post_ranking(posts: &[ScoredPost], limit: usize) {
    if posts.is_empty() {
        println!("No posts in this report.");
        return;
    }

    let shown = posts.len().min(limit);
    println!(
        "\n{}",
        format!("=== Most Suspicious Posts (top {shown} of {}) ===", posts.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<24} {:>6}  {:>3}  {:>6}  {:>6}  {}",
        "Rank".dimmed(),
        "User".dimmed(),
        "Score".dimmed(),
        "Kw".dimmed(),
        "Sent".dimmed(),
        "Ratio".dimmed(),
        "Text".dimmed(),
    );
    println!("  {}", "-".repeat(96).dimmed());

    for (i, post) in posts.iter().take(limit).enumerate() {
        let engagement_mark = if post.is_suspicious_engagement {
            "!".red().bold().to_string()
        } else {
            " ".to_string()
        };
        println!(
            "  {:>4}. @{:<22} {}  {:>3}  {:>6.2}  {:>5.1}{}  {}",
            i + 1,
            super::truncate_chars(&post.username, 20),
            colorize_score(post.suspicion_score),
            post.keyword_score,
            post.sentiment_score,
            post.repost_to_comment_ratio,
            engagement_mark,
            super::truncate_chars(&post.cleaned_content, 60).dimmed(),
        );
    }

    let flagged = posts.iter().filter(|p| p.is_suspicious_engagement).count();
    if flagged > 0 {
        println!(
            "\n  {} {} posts with anomalous repost-to-comment ratios",
            "!".red().bold(),
            flagged
        );
    }
}

/// Display the user report.
pub fn display_user_ranking(users: &[UserAggregate]) {
    if users.is_empty() {
        return;
    }

    println!(
        "\n{}",
        format!("=== Most Suspicious Users ({}) ===", users.len()).bold()
    );
    println!();
    for (i, user) in users.iter().enumerate() {
        println!(
            "  {:>4}. @{:<30} {}",
            i + 1,
            user.username,
            colorize_score(user.total_suspicion_score),
        );
    }
}

/// Display how many posts matched each risk keyword.
pub fn display_keyword_breakdown(posts: &[ScoredPost], lexicon: &KeywordLexicon) {
    let hits = keyword_hits(posts, lexicon);
    if hits.is_empty() {
        return;
    }

    println!("\n{}", "=== Keyword Hits ===".bold());
    println!();
    for (keyword, count) in hits {
        println!("  {:<26} {:>5}", keyword, count);
    }
}

/// Display what enrichment did to the batch.
pub fn display_enrich_stats(posts: usize, stats: &EnrichStats) {
    println!("  Posts analyzed:        {posts}");
    println!("  Translated:            {}", stats.translated);
    if stats.untranslated > 0 {
        println!(
            "  {} {}",
            "Translation failed:   ".yellow(),
            stats.untranslated
        );
    }
    println!("  Language undetected:   {}", stats.undetected);
    if stats.unknown_authors > 0 {
        println!("  Unparsed author field: {}", stats.unknown_authors);
    }
}

/// Display the saved-report index.
pub fn display_report_list(entries: &[ReportEntry]) {
    if entries.is_empty() {
        println!("No saved reports. Run `campaign-radar analyze <RUN_ID>` first.");
        return;
    }
    println!("\n{}", format!("=== Saved Reports ({}) ===", entries.len()).bold());
    for entry in entries {
        println!("  {:<40} {}", entry.id, entry.display_name.dimmed());
    }
}

/// Colorize a suspicion score: 6+ (two severe keywords) red, 3+ yellow.
fn colorize_score(score: f64) -> colored::ColoredString {
    let text = format!("{score:>6.2}");
    if score >= 6.0 {
        text.red().bold()
    } else if score >= 3.0 {
        text.yellow()
    } else {
        text.normal()
    }
}
