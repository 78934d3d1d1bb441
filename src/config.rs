use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Default model id for the prompt polisher.
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Path to the co-occurrence dataset JSON.
    pub data_path: PathBuf,
    /// API key for the prompt polisher — only needed with `--polish`.
    pub gemini_api_key: String,
    /// Model id used for polishing.
    pub gemini_model: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default except the Gemini key, which is only
    /// required when a command actually polishes a brief.
    pub fn load() -> Result<Self> {
        Ok(Self {
            data_path: env::var("CADENCE_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data/styles.json")),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: env::var("CADENCE_GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
        })
    }

    /// Check that the Gemini API key is configured.
    /// Call this before any operation that polishes a creative brief.
    pub fn require_gemini(&self) -> Result<()> {
        if self.gemini_api_key.is_empty() {
            anyhow::bail!(
                "GEMINI_API_KEY not set. Add it to your .env file to generate \
                 polished prompts, or drop the --polish flag."
            );
        }
        Ok(())
    }
}
