// Google Translate web endpoint implementation.
//
// Uses the keyless `client=gtx` endpoint that browser extensions and the
// common translation wrappers call. Source language is auto-detected by the
// service; the target is always English. The response is a nested JSON
// array whose first element holds one [translated, original, ...] segment
// per sentence.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::traits::Translator;

/// Default endpoint for the keyless Google Translate API.
pub const DEFAULT_GOOGLE_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// The web endpoint rejects longer payloads.
pub const MAX_TEXT_CHARS: usize = 5000;

/// Google Translate client.
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    /// Create a translator against the given endpoint URL.
    pub fn new(endpoint: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .context("Failed to build HTTP client for Google Translate")?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        let char_count = text.chars().count();
        if char_count > MAX_TEXT_CHARS {
            anyhow::bail!(
                "Text is {char_count} characters; Google Translate accepts at most {MAX_TEXT_CHARS}"
            );
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", "en"),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .context("Failed to call Google Translate")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Google Translate returned {}: {}", status, body);
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to parse Google Translate response")?;

        let translated = extract_translation(&body)
            .context("Google Translate response had no translation segments")?;

        if translated.trim().is_empty() {
            anyhow::bail!("Google Translate returned an empty translation");
        }

        debug!(
            chars = char_count,
            detected = body.get(2).and_then(|v| v.as_str()).unwrap_or("?"),
            "Translated text"
        );

        Ok(translated)
    }
}

/// Concatenate the translated sentence segments of a `translate_a/single` response.
pub fn extract_translation(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    Some(
        segments
            .iter()
            .filter_map(|segment| segment.get(0)?.as_str())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_sentence_segments() {
        let body: Value = serde_json::json!([
            [
                ["Hello world. ", "Bonjour le monde. ", null, null, 10],
                ["How are you?", "Comment ça va ?", null, null, 10]
            ],
            null,
            "fr"
        ]);
        assert_eq!(
            extract_translation(&body).as_deref(),
            Some("Hello world. How are you?")
        );
    }

    #[test]
    fn rejects_unexpected_shape() {
        assert!(extract_translation(&serde_json::json!({"error": "nope"})).is_none());
    }

    #[tokio::test]
    async fn oversized_text_fails_without_network() {
        let translator = GoogleTranslator::new("http://127.0.0.1:9").unwrap();
        let text = "a".repeat(MAX_TEXT_CHARS + 1);
        assert!(translator.translate(&text).await.is_err());
    }
}
