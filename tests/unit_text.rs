// Unit tests for per-record text handling.
//
// Tests isolated pure functions: clean_post_text cleanup guarantees,
// parse_author edge cases, and counter/hashtag coercion.

use serde_json::{json, Value};

use campaign_radar::text::author::parse_author;
use campaign_radar::text::metrics::{coerce_count, flatten_hashtags};
use campaign_radar::text::normalize::{clean_post_text, demojize};

// ============================================================
// clean_post_text
// ============================================================

#[test]
fn cleaned_text_has_no_urls_or_mentions() {
    let inputs = [
        "Read this https://example.com/a?b=c now",
        "see www.example.org and HTTP://SHOUT.COM",
        "@alice @bob_99 replying to you",
        "bare http and www leftovers",
        "trailing link http://t.co/abc",
        "",
        "   ",
        "mixed @user https://t.co/x #Tag 🔥",
    ];
    for input in inputs {
        let cleaned = clean_post_text(input);
        let lower = cleaned.to_lowercase();
        assert!(!lower.contains("http"), "{input:?} -> {cleaned:?}");
        assert!(!lower.contains("www"), "{input:?} -> {cleaned:?}");
        assert!(
            !cleaned.split_whitespace().any(|w| w.len() > 1 && w.starts_with('@')),
            "{input:?} -> {cleaned:?}"
        );
    }
}

#[test]
fn hashtag_marker_becomes_space() {
    assert_eq!(clean_post_text("#StopTheWar today"), "StopTheWar today");
    assert_eq!(clean_post_text("one#two"), "one two");
}

#[test]
fn emoji_become_padded_names() {
    assert_eq!(demojize("🔥"), " fire ");
    assert_eq!(clean_post_text("hot 🔥"), "hot  fire");
}

#[test]
fn multi_line_posts_are_flattened_and_trimmed() {
    assert_eq!(clean_post_text("\n first\nsecond \n"), "first second");
}

#[test]
fn accented_text_is_untouched() {
    assert_eq!(clean_post_text("café déjà vu"), "café déjà vu");
}

// ============================================================
// parse_author
// ============================================================

#[test]
fn author_display_name_then_handle() {
    let info = parse_author("Jane Doe\n@jane123");
    assert_eq!(info.username, "jane123");
    assert_eq!(info.display_name, "Jane Doe");
}

#[test]
fn author_single_line_is_unknown() {
    let info = parse_author("onlyname");
    assert_eq!(info.username, "unknown");
    assert_eq!(info.display_name, "onlyname");
}

#[test]
fn author_empty_input() {
    let info = parse_author("");
    assert_eq!(info.username, "unknown");
    assert_eq!(info.display_name, "");
}

#[test]
fn author_blank_handle_line_is_unknown() {
    let info = parse_author("Jane Doe\n");
    assert_eq!(info.username, "unknown");
    assert_eq!(info.display_name, "Jane Doe");
}

#[test]
fn author_handle_without_at_sign() {
    assert_eq!(parse_author("Jane\njane123").username, "jane123");
}

// ============================================================
// coerce_count
// ============================================================

#[test]
fn coerce_spec_examples() {
    assert_eq!(coerce_count(&json!("abc")), 0);
    assert_eq!(coerce_count(&json!("42")), 42);
    assert_eq!(coerce_count(&Value::Null), 0);
}

#[test]
fn coerce_numbers() {
    assert_eq!(coerce_count(&json!(17)), 17);
    assert_eq!(coerce_count(&json!(3.99)), 3);
    assert_eq!(coerce_count(&json!("1e3")), 1000);
}

#[test]
fn coerce_display_abbreviations_are_zero() {
    assert_eq!(coerce_count(&json!("1.2K")), 0);
    assert_eq!(coerce_count(&json!("1,234")), 0);
    assert_eq!(coerce_count(&json!("")), 0);
}

#[test]
fn coerce_non_numeric_json_is_zero() {
    assert_eq!(coerce_count(&json!(true)), 0);
    assert_eq!(coerce_count(&json!([1, 2])), 0);
    assert_eq!(coerce_count(&json!({"n": 1})), 0);
    assert_eq!(coerce_count(&json!("NaN")), 0);
}

#[test]
fn coerce_negative_passes_through() {
    assert_eq!(coerce_count(&json!("-4")), -4);
    assert_eq!(coerce_count(&json!(-2)), -2);
}

// ============================================================
// flatten_hashtags
// ============================================================

#[test]
fn hashtags_count_comma_pieces() {
    let tags = vec!["#one".to_string(), "#two,three".to_string()];
    let (joined, count) = flatten_hashtags(Some(tags.as_slice()));
    assert_eq!(joined, "#one, #two,three");
    assert_eq!(count, 3);
}

#[test]
fn hashtags_empty_list_counts_zero() {
    assert_eq!(flatten_hashtags(Some(&[][..])), (String::new(), 0));
    assert_eq!(flatten_hashtags(Some(&[String::new()][..])), (String::new(), 0));
}
