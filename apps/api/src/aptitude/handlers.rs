//! Axum route handlers for the aptitude feature.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::aptitude::explain::{generate_explanation, ExplainRequest};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

/// POST /explain
pub async fn handle_explain(
    State(state): State<AppState>,
    Json(request): Json<ExplainRequest>,
) -> Result<Json<ExplainResponse>, AppError> {
    let explanation = generate_explanation(&state.chain, &state.config, &request).await?;
    Ok(Json(ExplainResponse { explanation }))
}
