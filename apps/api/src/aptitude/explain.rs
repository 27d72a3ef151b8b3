//! Explanation generation — single-provider path with a degraded fallback.
//!
//! Unlike the coach path there is no fallback chain here: only the primary
//! provider is asked. Total upstream failure still returns a minimal canned
//! answer stating the correct choice, because showing a student *something*
//! beats a blank error.

use serde::Deserialize;
use tracing::warn;

use crate::aptitude::prompts;
use crate::config::Config;
use crate::errors::AppError;
use crate::llm::chain::ProviderChain;
use crate::llm::{strip_emphasis, ChatMessage, GenerationParams};

// Factual explanation: favor determinism over variety.
const EXPLANATION_PARAMS: GenerationParams = GenerationParams {
    temperature: 0.3,
    max_tokens: 1000,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub user_answer: String,
}

/// Generates a three-section explanation for a wrong aptitude answer.
pub async fn generate_explanation(
    chain: &ProviderChain,
    config: &Config,
    request: &ExplainRequest,
) -> Result<String, AppError> {
    let question = request.question.trim();
    let correct_answer = request.correct_answer.trim();
    let user_answer = request.user_answer.trim();

    let mut missing = Vec::new();
    if question.is_empty() {
        missing.push("question");
    }
    if correct_answer.is_empty() {
        missing.push("correctAnswer");
    }
    if user_answer.is_empty() {
        missing.push("userAnswer");
    }
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required field(s): {}",
            missing.join(", ")
        )));
    }

    let Some(primary) = chain.primary() else {
        return Err(AppError::no_provider(config));
    };

    let system = prompts::explain_system(config.explanation_min_sentences);
    let user = prompts::explain_user_prompt(question, correct_answer, user_answer);

    match primary
        .generate(&system, &[ChatMessage::user(user)], EXPLANATION_PARAMS)
        .await
    {
        Ok(text) => Ok(strip_emphasis(&text)),
        Err(error) => {
            warn!(
                "explanation generation failed on {}, returning degraded answer: {error}",
                primary.name()
            );
            Ok(degraded_explanation(correct_answer, user_answer))
        }
    }
}

/// The degraded-but-displayable answer used when generation fails.
pub fn degraded_explanation(correct_answer: &str, user_answer: &str) -> String {
    format!(
        "The correct answer is {correct_answer}. This satisfies the logic of the question. \
         Your choice of {user_answer} was incorrect because it does not follow the required \
         pattern. Keep practicing! (AI explanation is unavailable right now.)"
    )
}
