// LibreTranslate implementation (self-hosted or hosted instance).
//
// API docs: https://libretranslate.com/docs

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::traits::Translator;

/// LibreTranslate client.
pub struct LibreTranslator {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl LibreTranslator {
    /// Create a translator for the instance at `base_url`. An empty key is
    /// treated as no key.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client for LibreTranslate")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: (!api_key.is_empty()).then(|| api_key.to_string()),
        })
    }
}

#[async_trait]
impl Translator for LibreTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        let request = TranslateRequest {
            q: text,
            source: "auto",
            target: "en",
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(format!("{}/translate", self.base_url))
            .json(&request)
            .send()
            .await
            .context("Failed to call LibreTranslate")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("LibreTranslate returned {}: {}", status, body);
        }

        let result: TranslateResponse = response
            .json()
            .await
            .context("Failed to parse LibreTranslate response")?;

        Ok(result.translated_text)
    }
}

// --- LibreTranslate request/response types ---

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}
