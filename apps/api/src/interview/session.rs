//! Interview session logic — opening message and the question/answer loop.

use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::interview::prompts;
use crate::llm::chain::ProviderChain;
use crate::llm::{strip_emphasis, ChatMessage, GenerationParams, Role};

const START_PARAMS: GenerationParams = GenerationParams {
    temperature: 0.7,
    max_tokens: 1024,
};

const STEP_PARAMS: GenerationParams = GenerationParams {
    temperature: 0.7,
    max_tokens: 1024,
};

/// Confidence assumed when the client sends no speech metrics.
const DEFAULT_CONFIDENCE: f64 = 0.8;

/// One multiple-choice question from the client-supplied bank.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: usize,
    pub explanation: String,
}

/// One prior turn of the conversation, replayed with every step request.
#[derive(Debug, Clone, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Model,
}

impl From<TurnRole> for Role {
    fn from(role: TurnRole) -> Self {
        match role {
            TurnRole::User => Role::User,
            TurnRole::Model => Role::Model,
        }
    }
}

/// Opens a session: either a practice-reading paragraph for the role, or an
/// interviewer greeting asking for the candidate's name.
///
/// Infallible by design — an unconfigured chain or a failed call degrades to
/// a canned string so the caller is never blocked.
pub async fn start_interview(chain: &ProviderChain, role: &str, wants_paragraph: bool) -> String {
    let fallback = if wants_paragraph {
        prompts::FALLBACK_PARAGRAPH
    } else {
        prompts::FALLBACK_GREETING
    };

    if chain.is_empty() {
        return fallback.to_string();
    }

    let system = prompts::start_system(role, wants_paragraph);
    let user = prompts::start_user_prompt(role, wants_paragraph);

    match chain
        .generate(&system, &[ChatMessage::user(user)], START_PARAMS)
        .await
    {
        Ok(text) => strip_emphasis(&text),
        Err(attempts) => {
            warn!(
                "interview start failed across {} provider(s), using fallback",
                attempts.len()
            );
            fallback.to_string()
        }
    }
}

/// Advances the interview by one turn.
///
/// The prior history is replayed as model context; the last user turn is
/// wrapped in a grading prompt built from the question bank. Provider failure
/// returns a fixed apology so the session loop stays alive.
pub async fn process_interview_step(
    chain: &ProviderChain,
    history: &[Turn],
    questions: &[Question],
    confidence: Option<f64>,
) -> Result<String, AppError> {
    let Some(last) = history.last() else {
        return Err(AppError::Validation(
            "history must contain at least one turn".to_string(),
        ));
    };
    if last.role != TurnRole::User {
        return Err(AppError::Validation(
            "the last history turn must be a user turn".to_string(),
        ));
    }

    if chain.is_empty() {
        return Ok(prompts::STEP_UNAVAILABLE.to_string());
    }

    let user_turns = history.iter().filter(|t| t.role == TurnRole::User).count();
    let question_index = questions_presented(history);

    let prompt = if user_turns == 1 {
        prompts::first_turn_prompt(last.text.trim(), questions.first())
    } else {
        let previous = question_index
            .checked_sub(1)
            .and_then(|i| questions.get(i));
        let next = questions.get(question_index);
        prompts::evaluation_prompt(
            last.text.trim(),
            confidence.unwrap_or(DEFAULT_CONFIDENCE),
            previous,
            next,
        )
    };

    let mut messages: Vec<ChatMessage> = history[..history.len() - 1]
        .iter()
        .map(|turn| ChatMessage {
            role: turn.role.into(),
            text: turn.text.clone(),
        })
        .collect();
    messages.push(ChatMessage::user(prompt));

    match chain
        .generate(prompts::INTERVIEW_STEP_SYSTEM, &messages, STEP_PARAMS)
        .await
    {
        Ok(text) => Ok(strip_emphasis(&text)),
        Err(attempts) => {
            warn!(
                "interview step failed across {} provider(s), using apology",
                attempts.len()
            );
            Ok(prompts::STEP_APOLOGY.to_string())
        }
    }
}

/// How many bank questions the model has already presented — the count of
/// model turns carrying the question marker.
fn questions_presented(history: &[Turn]) -> usize {
    history
        .iter()
        .filter(|t| t.role == TurnRole::Model && t.text.contains(prompts::NEXT_QUESTION_MARKER))
        .count()
}
