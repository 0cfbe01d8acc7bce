// Language service traits: the swap-ready abstraction.
//
// Detection is local and synchronous. Translation is async because every
// real provider is an HTTP API.

use anyhow::Result;
use async_trait::async_trait;

/// Outcome of a detection attempt that did not fail outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// An ISO-639-1-like code ("en", "fr"), or the detector's own code when
    /// no two-letter form exists.
    Language(String),
    /// The input carries no usable signal (digits, symbols, too short).
    Undetectable,
}

/// Trait for identifying the language of a text.
pub trait LanguageDetector: Send + Sync {
    /// Detect the language of `text`. An `Err` means the detector itself
    /// broke, as opposed to the text being undetectable.
    fn detect(&self, text: &str) -> Result<Detection>;
}

/// Trait for translating text into English.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` (source language auto-detected) into English.
    /// A single call: retries are the caller's concern.
    async fn translate(&self, text: &str) -> Result<String>;
}

/// Translator used when translation is switched off. Returns text unchanged
/// and never fails, so it never triggers the retry policy.
pub struct PassthroughTranslator;

#[async_trait]
impl Translator for PassthroughTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}
