//! Code review generation — one low-temperature request, apology on failure.

use tracing::warn;

use crate::llm::chain::ProviderChain;
use crate::llm::{strip_emphasis, ChatMessage, GenerationParams};
use crate::review::prompts;

// Low temperature: review consistency matters more than variety.
const REVIEW_PARAMS: GenerationParams = GenerationParams {
    temperature: 0.2,
    max_tokens: 1024,
};

/// Reviews a code submission. Infallible by design — an unconfigured chain
/// or a failed call degrades to the canned apology.
pub async fn review_code(
    chain: &ProviderChain,
    challenge_title: &str,
    problem_statement: &str,
    code: &str,
) -> String {
    if chain.is_empty() {
        return prompts::REVIEW_APOLOGY.to_string();
    }

    let user = prompts::review_user_prompt(challenge_title, problem_statement, code);

    match chain
        .generate(prompts::REVIEW_SYSTEM, &[ChatMessage::user(user)], REVIEW_PARAMS)
        .await
    {
        Ok(text) => strip_emphasis(&text),
        Err(attempts) => {
            warn!(
                "code review failed across {} provider(s), using apology",
                attempts.len()
            );
            prompts::REVIEW_APOLOGY.to_string()
        }
    }
}
