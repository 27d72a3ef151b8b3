//! Feedback generation — validate, render prompts, walk the provider chain.

use serde::{Deserialize, Deserializer};

use crate::coach::prompts;
use crate::config::Config;
use crate::errors::AppError;
use crate::llm::chain::ProviderChain;
use crate::llm::{strip_emphasis, ChatMessage, GenerationParams};

// High temperature maximizes response variety across repeated attempts.
const FEEDBACK_PARAMS: GenerationParams = GenerationParams {
    temperature: 0.9,
    max_tokens: 256,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachRequest {
    #[serde(default)]
    pub paragraph: String,
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub metrics: Metrics,
    #[serde(default)]
    pub context: Option<CoachContext>,
    #[serde(default)]
    pub previous_feedback: Option<String>,
}

/// Speech metrics from the client. Missing or malformed values default to
/// zero rather than rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metrics {
    #[serde(default, deserialize_with = "number_or_zero")]
    pub speed: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub confidence: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub fillers: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub pauses: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoachContext {
    pub langs: Option<String>,
    pub company: Option<String>,
}

fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0))
}

/// Generates coaching feedback for one reading attempt.
///
/// Validation failures and an unconfigured chain return before any network
/// call. Providers are tried in chain order; the first non-empty generation
/// wins.
pub async fn generate_feedback(
    chain: &ProviderChain,
    config: &Config,
    request: &CoachRequest,
) -> Result<String, AppError> {
    let paragraph = request.paragraph.trim();
    let transcript = request.transcript.trim();

    let mut missing = Vec::new();
    if paragraph.is_empty() {
        missing.push("paragraph");
    }
    if transcript.is_empty() {
        missing.push("transcript");
    }
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required field(s): {}",
            missing.join(", ")
        )));
    }

    if chain.is_empty() {
        return Err(AppError::no_provider(config));
    }

    let user_prompt = prompts::coach_user_prompt(
        paragraph,
        transcript,
        &request.metrics,
        request.context.as_ref(),
        request.previous_feedback.as_deref(),
    );

    let text = chain
        .generate(
            prompts::COACH_SYSTEM,
            &[ChatMessage::user(user_prompt)],
            FEEDBACK_PARAMS,
        )
        .await
        .map_err(AppError::from_attempts)?;

    Ok(strip_emphasis(&text))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::llm::mock::{MockBehavior, MockProvider};

    fn test_config() -> Config {
        Config {
            openrouter_api_key: None,
            gemini_api_key: None,
            port: 8080,
            rust_log: "info".into(),
            explanation_min_sentences: 8,
        }
    }

    fn valid_request() -> CoachRequest {
        CoachRequest {
            paragraph: "The quick brown fox".into(),
            transcript: "The quick brown fox".into(),
            metrics: Metrics {
                speed: 120.0,
                confidence: 0.9,
                fillers: 0.0,
                pauses: 0.0,
            },
            context: None,
            previous_feedback: None,
        }
    }

    #[tokio::test]
    async fn test_missing_transcript_fails_without_provider_call() {
        let provider = Arc::new(MockProvider::new(
            "mock",
            MockBehavior::Succeed("unused".into()),
        ));
        let chain = ProviderChain::new(vec![provider.clone()]);
        let request = CoachRequest {
            transcript: "   ".into(),
            ..valid_request()
        };

        let err = generate_feedback(&chain, &test_config(), &request)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("transcript")));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_both_fields_are_named() {
        let chain = ProviderChain::new(vec![]);
        let request = CoachRequest {
            paragraph: String::new(),
            transcript: String::new(),
            ..valid_request()
        };

        let err = generate_feedback(&chain, &test_config(), &request)
            .await
            .unwrap_err();
        match err {
            AppError::Validation(msg) => {
                assert!(msg.contains("paragraph"));
                assert!(msg.contains("transcript"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_chain_reports_missing_credentials() {
        let chain = ProviderChain::new(vec![]);

        let err = generate_feedback(&chain, &test_config(), &valid_request())
            .await
            .unwrap_err();
        match err {
            AppError::NoProviderConfigured { missing } => {
                assert!(missing.contains("OPENROUTER_API_KEY"));
                assert!(missing.contains("GEMINI_API_KEY"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_primary_success_short_circuits() {
        let primary = Arc::new(MockProvider::new(
            "primary",
            MockBehavior::Succeed("Great clarity! Keep the same pace.".into()),
        ));
        let secondary = Arc::new(MockProvider::new(
            "secondary",
            MockBehavior::Succeed("unused".into()),
        ));
        let chain = ProviderChain::new(vec![primary.clone(), secondary.clone()]);

        let feedback = generate_feedback(&chain, &test_config(), &valid_request())
            .await
            .unwrap();

        assert_eq!(feedback, "Great clarity! Keep the same pace.");
        assert_eq!(primary.call_count(), 1);
        assert_eq!(secondary.call_count(), 0);
    }

    #[tokio::test]
    async fn test_fallback_result_is_trimmed_and_stripped() {
        let primary = Arc::new(MockProvider::new(
            "primary",
            MockBehavior::FailApi {
                status: 500,
                message: "down".into(),
            },
        ));
        let secondary = Arc::new(MockProvider::new(
            "secondary",
            MockBehavior::Succeed("  **Solid** delivery overall.  ".into()),
        ));
        let chain = ProviderChain::new(vec![primary, secondary]);

        let feedback = generate_feedback(&chain, &test_config(), &valid_request())
            .await
            .unwrap();
        assert_eq!(feedback, "Solid delivery overall.");
    }

    #[tokio::test]
    async fn test_all_providers_failing_enumerates_reasons() {
        let primary = Arc::new(MockProvider::new(
            "primary",
            MockBehavior::FailApi {
                status: 500,
                message: "first down".into(),
            },
        ));
        let secondary = Arc::new(MockProvider::new(
            "secondary",
            MockBehavior::FailApi {
                status: 502,
                message: "second down".into(),
            },
        ));
        let chain = ProviderChain::new(vec![primary, secondary]);

        let err = generate_feedback(&chain, &test_config(), &valid_request())
            .await
            .unwrap_err();
        match err {
            AppError::AllProvidersFailed { summary } => {
                assert!(summary.contains("first down"));
                assert!(summary.contains("second down"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_metrics_default_to_zero() {
        let raw = r#"{
            "paragraph": "p",
            "transcript": "t",
            "metrics": {"speed": "fast", "confidence": 0.5}
        }"#;
        let request: CoachRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.metrics.speed, 0.0);
        assert_eq!(request.metrics.confidence, 0.5);
        assert_eq!(request.metrics.fillers, 0.0);
    }

    #[test]
    fn test_missing_metrics_object_defaults_to_zero() {
        let raw = r#"{"paragraph": "p", "transcript": "t"}"#;
        let request: CoachRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.metrics.speed, 0.0);
        assert_eq!(request.metrics.pauses, 0.0);
    }
}
