//! LLM provider abstraction — the single point of entry for all model calls.
//!
//! ARCHITECTURAL RULE: no feature module may talk to a provider's HTTP API
//! directly. Every generation request goes through a [`Provider`] behind the
//! [`chain::ProviderChain`], so fallback order and error handling live in
//! exactly one place.

use async_trait::async_trait;
use thiserror::Error;

pub mod chain;
pub mod gemini;
pub mod openrouter;

#[cfg(test)]
pub mod mock;

/// Per-attempt HTTP timeout. Expiry counts as a provider failure and the
/// chain advances to the next provider.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Upstream error bodies are truncated to this many characters before they
/// are surfaced in error details.
const MAX_UPSTREAM_BODY_CHARS: usize = 500;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("authentication rejected (status {status}): {message}")]
    AuthRejected { status: u16, message: String },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider returned no generated text")]
    EmptyText,
}

impl ProviderError {
    /// Classifies an upstream non-success status, truncating the error body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = truncate_body(body);
        if status == 401 || status == 403 {
            ProviderError::AuthRejected { status, message }
        } else {
            ProviderError::Api { status, message }
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ProviderError::AuthRejected { .. })
    }
}

/// A single turn in a chat-style generation request.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }
}

/// Sampling parameters for one generation request.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// An external text-generation service reachable over HTTPS.
///
/// Implementations are single-shot: no retries, no fallback. The
/// [`chain::ProviderChain`] owns the fallback policy.
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Sends one generation request and returns the raw generated text.
    /// An empty generation is an error (`ProviderError::EmptyText`), never
    /// an empty `Ok`.
    async fn generate(
        &self,
        system: &str,
        messages: &[ChatMessage],
        params: GenerationParams,
    ) -> Result<String, ProviderError>;
}

/// Strips emphasis markup the model may emit despite plain-text instructions,
/// and trims surrounding whitespace. Applied uniformly to all generated text.
pub fn strip_emphasis(text: &str) -> String {
    text.replace('*', "").trim().to_string()
}

/// Truncates an upstream error body to a bounded snippet, respecting char
/// boundaries.
pub fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_UPSTREAM_BODY_CHARS) {
        Some((idx, _)) => format!("{}…", &body[..idx]),
        None => body.to_string(),
    }
}
