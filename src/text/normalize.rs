// Post text cleanup ahead of language detection and scoring.
//
// Steps run in a fixed order, each on the previous step's output:
// URLs, mentions, hashtag markers, emoji, then whitespace.

use std::sync::LazyLock;

use regex_lite::Regex;

/// A URL-like token: anything from `http`/`www` to the next whitespace.
/// Matching `http` rather than `http://` means a bare "http" is dropped too,
/// so no `http`/`www` substring survives cleanup.
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:http|www)\S*").expect("valid URL regex"));

static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").expect("valid mention regex"));

/// Longest emoji sequence (in chars) we try to match at a position.
/// ZWJ family sequences run up to 7 scalars plus variation selectors.
const MAX_EMOJI_CHARS: usize = 10;

/// Clean raw post text for downstream analysis.
///
/// Empty or whitespace-only input yields an empty string.
pub fn clean_post_text(text: &str) -> String {
    let text = URL_RE.replace_all(text, "");
    let text = MENTION_RE.replace_all(&text, "");
    let text = text.replace('#', " ");
    let text = demojize(&text);
    text.replace('\n', " ").trim().to_string()
}

/// Replace every emoji with its descriptive name, padded with spaces.
///
/// `"good 👍"` becomes `"good  thumbs_up "`.
pub fn demojize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(first) = rest.chars().next() {
        match longest_emoji_prefix(rest) {
            Some((emoji, len)) => {
                out.push(' ');
                out.push_str(&emoji_name(emoji));
                out.push(' ');
                rest = &rest[len..];
            }
            None => {
                out.push(first);
                rest = &rest[first.len_utf8()..];
            }
        }
    }

    out
}

/// Find the longest emoji at the start of `text`, returning it and its byte length.
fn longest_emoji_prefix(text: &str) -> Option<(&'static emojis::Emoji, usize)> {
    let mut chars = text.chars();
    let first = chars.next()?;
    // Plain ASCII is only ever the start of a keycap sequence ("1️⃣").
    if first.is_ascii() && !matches!(chars.next(), Some('\u{fe0f}' | '\u{20e3}')) {
        return None;
    }

    let ends: Vec<usize> = text
        .char_indices()
        .take(MAX_EMOJI_CHARS)
        .map(|(i, c)| i + c.len_utf8())
        .collect();

    ends.into_iter()
        .rev()
        .find_map(|end| emojis::get(&text[..end]).map(|emoji| (emoji, end)))
}

/// Render an emoji's CLDR name in underscore form: "flag: United States"
/// becomes "flag_United_States".
fn emoji_name(emoji: &emojis::Emoji) -> String {
    emoji
        .name()
        .split_whitespace()
        .map(|word| word.trim_matches(|c| c == ':' || c == ','))
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
