use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::language::google::DEFAULT_GOOGLE_TRANSLATE_URL;

/// Which translation backend to use.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslatorBackend {
    /// Keyless Google Translate web endpoint (default)
    Google,
    /// LibreTranslate instance: requires LIBRETRANSLATE_URL
    Libre,
    /// No translation; non-English text is analyzed as-is
    Off,
}

/// Central configuration loaded from environment variables.
///
/// Secrets come from env vars (never hardcoded). The .env file is loaded
/// automatically at startup via dotenvy.
pub struct Config {
    /// Directory holding scraper output and staging tables
    pub data_dir: PathBuf,
    /// Directory for conventionally named reports
    pub reports_dir: PathBuf,
    /// Which translator to use (default: Google)
    pub translator_backend: TranslatorBackend,
    pub google_translate_url: String,
    pub libretranslate_url: String,
    pub libretranslate_api_key: String,
}

impl Config {
    /// Load configuration from environment variables. Every setting has a
    /// default except the LibreTranslate URL.
    pub fn load() -> Result<Self> {
        let translator_backend = match env::var("RADAR_TRANSLATOR").as_deref() {
            Ok("libre") => TranslatorBackend::Libre,
            Ok("off") => TranslatorBackend::Off,
            Ok("google") | Err(_) => TranslatorBackend::Google,
            Ok(other) => anyhow::bail!(
                "Unknown RADAR_TRANSLATOR value '{other}'. Use google, libre, or off."
            ),
        };

        Ok(Self {
            data_dir: env::var("RADAR_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            reports_dir: env::var("RADAR_REPORTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./reports")),
            translator_backend,
            google_translate_url: env::var("GOOGLE_TRANSLATE_URL")
                .unwrap_or_else(|_| DEFAULT_GOOGLE_TRANSLATE_URL.to_string()),
            libretranslate_url: env::var("LIBRETRANSLATE_URL").unwrap_or_default(),
            libretranslate_api_key: env::var("LIBRETRANSLATE_API_KEY").unwrap_or_default(),
        })
    }

    /// Validate that the chosen translator backend has what it needs.
    pub fn require_translator(&self) -> Result<()> {
        match self.translator_backend {
            TranslatorBackend::Libre if self.libretranslate_url.is_empty() => {
                anyhow::bail!(
                    "RADAR_TRANSLATOR=libre but LIBRETRANSLATE_URL is not set.\n\
                     Add it to your .env file, or set RADAR_TRANSLATOR=google."
                );
            }
            _ => Ok(()),
        }
    }
}
