//! Provider chain — ordered fallback over configured providers.
//!
//! Policy (fixed, documented): OpenRouter first, Gemini second. Providers are
//! tried strictly sequentially and the chain short-circuits on the first
//! non-empty success. There is no retry or backoff beyond this one-shot
//! fallback.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::llm::gemini::GeminiProvider;
use crate::llm::openrouter::OpenRouterProvider;
use crate::llm::{ChatMessage, GenerationParams, Provider, ProviderError};

/// One provider that was tried and failed, kept for the error summary.
#[derive(Debug)]
pub struct FailedAttempt {
    pub provider: &'static str,
    pub error: ProviderError,
}

/// The ordered list of available providers. A provider is present only if
/// its API key was found in the environment; an empty chain means no
/// provider is configured.
#[derive(Clone)]
pub struct ProviderChain {
    providers: Vec<Arc<dyn Provider>>,
}

impl ProviderChain {
    pub fn new(providers: Vec<Arc<dyn Provider>>) -> Self {
        Self { providers }
    }

    /// Builds the chain from startup configuration. Absent keys disable
    /// their provider without failing.
    pub fn from_config(config: &Config) -> Self {
        let mut providers: Vec<Arc<dyn Provider>> = Vec::new();
        if let Some(key) = &config.openrouter_api_key {
            providers.push(Arc::new(OpenRouterProvider::new(key.clone())));
        }
        if let Some(key) = &config.gemini_api_key {
            providers.push(Arc::new(GeminiProvider::new(key.clone())));
        }

        let chain = Self::new(providers);
        if chain.is_empty() {
            warn!("no LLM provider keys configured; generation endpoints will degrade or fail");
        } else {
            info!("provider chain: {}", chain.names().join(" -> "));
        }
        chain
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// The first configured provider. Paths without a fallback chain
    /// (aptitude explanations) use only this one.
    pub fn primary(&self) -> Option<&dyn Provider> {
        self.providers.first().map(|p| p.as_ref())
    }

    /// Tries each provider in order and returns the first trimmed non-empty
    /// generation. On total failure returns every attempt with its reason.
    pub async fn generate(
        &self,
        system: &str,
        messages: &[ChatMessage],
        params: GenerationParams,
    ) -> Result<String, Vec<FailedAttempt>> {
        let mut attempts = Vec::new();

        for provider in &self.providers {
            match provider.generate(system, messages, params).await {
                Ok(text) => {
                    let text = text.trim().to_string();
                    if text.is_empty() {
                        warn!("provider {} returned empty text", provider.name());
                        attempts.push(FailedAttempt {
                            provider: provider.name(),
                            error: ProviderError::EmptyText,
                        });
                        continue;
                    }
                    return Ok(text);
                }
                Err(error) => {
                    warn!("provider {} failed: {error}", provider.name());
                    attempts.push(FailedAttempt {
                        provider: provider.name(),
                        error,
                    });
                }
            }
        }

        Err(attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::mock::{MockBehavior, MockProvider};

    fn params() -> GenerationParams {
        GenerationParams {
            temperature: 0.9,
            max_tokens: 256,
        }
    }

    #[tokio::test]
    async fn test_short_circuits_on_primary_success() {
        let primary = Arc::new(MockProvider::new(
            "primary",
            MockBehavior::Succeed("  first  ".into()),
        ));
        let secondary = Arc::new(MockProvider::new(
            "secondary",
            MockBehavior::Succeed("second".into()),
        ));
        let chain = ProviderChain::new(vec![primary.clone(), secondary.clone()]);

        let text = chain
            .generate("sys", &[ChatMessage::user("hi")], params())
            .await
            .unwrap();

        assert_eq!(text, "first");
        assert_eq!(primary.call_count(), 1);
        assert_eq!(secondary.call_count(), 0);
    }

    #[tokio::test]
    async fn test_falls_back_when_primary_fails() {
        let primary = Arc::new(MockProvider::new(
            "primary",
            MockBehavior::FailApi {
                status: 500,
                message: "boom".into(),
            },
        ));
        let secondary = Arc::new(MockProvider::new(
            "secondary",
            MockBehavior::Succeed("  rescued  ".into()),
        ));
        let chain = ProviderChain::new(vec![primary.clone(), secondary.clone()]);

        let text = chain
            .generate("sys", &[ChatMessage::user("hi")], params())
            .await
            .unwrap();

        assert_eq!(text, "rescued");
        assert_eq!(primary.call_count(), 1);
        assert_eq!(secondary.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_text_advances_the_chain() {
        let primary = Arc::new(MockProvider::new("primary", MockBehavior::FailEmpty));
        let secondary = Arc::new(MockProvider::new(
            "secondary",
            MockBehavior::Succeed("   ".into()),
        ));
        let tertiary = Arc::new(MockProvider::new(
            "tertiary",
            MockBehavior::Succeed("real".into()),
        ));
        let chain = ProviderChain::new(vec![primary, secondary, tertiary]);

        let text = chain
            .generate("sys", &[ChatMessage::user("hi")], params())
            .await
            .unwrap();
        assert_eq!(text, "real");
    }

    #[tokio::test]
    async fn test_all_failures_are_collected_in_order() {
        let primary = Arc::new(MockProvider::new(
            "primary",
            MockBehavior::FailAuth {
                status: 401,
                message: "bad key".into(),
            },
        ));
        let secondary = Arc::new(MockProvider::new(
            "secondary",
            MockBehavior::FailApi {
                status: 502,
                message: "upstream down".into(),
            },
        ));
        let chain = ProviderChain::new(vec![primary, secondary]);

        let attempts = chain
            .generate("sys", &[ChatMessage::user("hi")], params())
            .await
            .unwrap_err();

        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].provider, "primary");
        assert!(attempts[0].error.is_auth());
        assert_eq!(attempts[1].provider, "secondary");
        assert!(attempts[1].error.to_string().contains("upstream down"));
    }

    #[tokio::test]
    async fn test_empty_chain_returns_no_attempts() {
        let chain = ProviderChain::new(vec![]);
        let attempts = chain
            .generate("sys", &[ChatMessage::user("hi")], params())
            .await
            .unwrap_err();
        assert!(attempts.is_empty());
        assert!(chain.is_empty());
    }
}
