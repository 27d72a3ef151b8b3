//! Axum route handlers for the interview feature.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::session::{process_interview_step, start_interview, Question, Turn};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartRequest {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub wants_paragraph: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRequest {
    #[serde(default)]
    pub history: Vec<Turn>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct InterviewResponse {
    pub message: String,
}

/// POST /interview/start
pub async fn handle_start(
    State(state): State<AppState>,
    Json(request): Json<StartRequest>,
) -> Result<Json<InterviewResponse>, AppError> {
    let role = request.role.trim();
    if role.is_empty() {
        return Err(AppError::Validation("Missing required field: role".to_string()));
    }

    let message = start_interview(&state.chain, role, request.wants_paragraph).await;
    Ok(Json(InterviewResponse { message }))
}

/// POST /interview/step
pub async fn handle_step(
    State(state): State<AppState>,
    Json(request): Json<StepRequest>,
) -> Result<Json<InterviewResponse>, AppError> {
    let message = process_interview_step(
        &state.chain,
        &request.history,
        &request.questions,
        request.confidence,
    )
    .await?;
    Ok(Json(InterviewResponse { message }))
}
