// Language service adapter: detect, then translate non-English text.
//
// This is the only pipeline step that blocks on external I/O. Every failure
// mode collapses into a sentinel language code or the untranslated text; a
// post is never dropped and the batch never aborts because of it.

use std::time::Duration;

use tracing::{debug, warn};

use super::traits::{Detection, LanguageDetector, Translator};

/// Language code for empty or undetectable input.
pub const LANGUAGE_UNKNOWN: &str = "unknown";
/// Language code when the detector itself failed.
pub const LANGUAGE_ERROR: &str = "error";
/// Language code that skips translation.
pub const LANGUAGE_ENGLISH: &str = "en";

/// Bounded retry with a fixed (non-growing) pause between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total translation attempts per post (default 3)
    pub max_attempts: u32,
    /// Pause between consecutive attempts (default 3s)
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_secs(3),
        }
    }
}

/// Detected language plus the text to analyze downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localized {
    pub language: String,
    pub text: String,
    /// True when `text` came back from the translator.
    pub translated: bool,
}

impl Localized {
    fn untouched(language: &str, text: &str) -> Self {
        Self {
            language: language.to_string(),
            text: text.to_string(),
            translated: false,
        }
    }
}

/// Detect the language of `text` and translate it to English when needed.
///
/// - empty/whitespace input: `("unknown", text)`, no detection attempted
/// - undetectable input: `("unknown", text)`
/// - detector failure: `("error", text)`
/// - English: `("en", text)`
/// - otherwise: `(lang, translation)`, or `(lang, text)` once every
///   translation attempt has failed
pub async fn localize(
    text: &str,
    detector: &dyn LanguageDetector,
    translator: &dyn Translator,
    retry: &RetryPolicy,
) -> Localized {
    if text.trim().is_empty() {
        return Localized::untouched(LANGUAGE_UNKNOWN, text);
    }

    let language = match detector.detect(text) {
        Ok(Detection::Language(code)) => code,
        Ok(Detection::Undetectable) => return Localized::untouched(LANGUAGE_UNKNOWN, text),
        Err(e) => {
            warn!(error = %e, "Language detection failed");
            return Localized::untouched(LANGUAGE_ERROR, text);
        }
    };

    if language == LANGUAGE_ENGLISH {
        return Localized::untouched(LANGUAGE_ENGLISH, text);
    }

    match translate_with_retry(text, translator, retry).await {
        Some(translation) => Localized {
            language,
            text: translation,
            translated: true,
        },
        None => {
            warn!(
                language = language.as_str(),
                attempts = retry.max_attempts,
                "Translation failed on every attempt, keeping original text"
            );
            Localized::untouched(&language, text)
        }
    }
}

/// Call the translator up to `retry.max_attempts` times, sleeping
/// `retry.backoff` between failures. Returns `None` when every attempt failed.
pub async fn translate_with_retry(
    text: &str,
    translator: &dyn Translator,
    retry: &RetryPolicy,
) -> Option<String> {
    for attempt in 1..=retry.max_attempts {
        match translator.translate(text).await {
            Ok(translation) => {
                debug!(attempt, "Translation succeeded");
                return Some(translation);
            }
            Err(e) => {
                warn!(attempt, error = %e, "Translation attempt failed");
                if attempt < retry.max_attempts {
                    tokio::time::sleep(retry.backoff).await;
                }
            }
        }
    }
    None
}
