use anyhow::{Context, Result};

pub const OPENROUTER_KEY_VAR: &str = "OPENROUTER_API_KEY";
pub const GEMINI_KEY_VAR: &str = "GEMINI_API_KEY";

const DEFAULT_EXPLANATION_MIN_SENTENCES: u32 = 8;

/// Application configuration loaded once from environment variables at
/// startup and passed around as an immutable value. Provider keys are
/// optional: a missing key disables that provider without crashing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Minimum sentence floor the aptitude-explanation prompt asks for.
    /// Clamped to 6..=10.
    pub explanation_min_sentences: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openrouter_api_key: optional_env(OPENROUTER_KEY_VAR),
            gemini_api_key: optional_env(GEMINI_KEY_VAR),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            explanation_min_sentences: std::env::var("EXPLANATION_MIN_SENTENCES")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .map(clamp_min_sentences)
                .unwrap_or(DEFAULT_EXPLANATION_MIN_SENTENCES),
        })
    }

    /// Names of provider key variables absent from the environment, for
    /// `NoProviderConfigured` diagnostics.
    pub fn missing_provider_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.openrouter_api_key.is_none() {
            missing.push(OPENROUTER_KEY_VAR);
        }
        if self.gemini_api_key.is_none() {
            missing.push(GEMINI_KEY_VAR);
        }
        missing
    }
}

/// Reads an optional variable, treating empty/whitespace values as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn clamp_min_sentences(value: u32) -> u32 {
    value.clamp(6, 10)
}
