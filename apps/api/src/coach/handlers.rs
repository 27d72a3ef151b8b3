//! Axum route handlers for the coach feature.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::coach::feedback::{generate_feedback, CoachRequest};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CoachResponse {
    pub feedback: String,
}

/// POST /coach
pub async fn handle_coach(
    State(state): State<AppState>,
    Json(request): Json<CoachRequest>,
) -> Result<Json<CoachResponse>, AppError> {
    let feedback = generate_feedback(&state.chain, &state.config, &request).await?;
    Ok(Json(CoachResponse { feedback }))
}
