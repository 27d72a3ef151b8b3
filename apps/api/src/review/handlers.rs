//! Axum route handlers for the review feature.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::review::reviewer::review_code;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    #[serde(default)]
    pub challenge_title: String,
    #[serde(default)]
    pub problem_statement: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review: String,
}

/// POST /review/code
pub async fn handle_review(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    if request.code.trim().is_empty() {
        return Err(AppError::Validation("Missing required field: code".to_string()));
    }

    let review = review_code(
        &state.chain,
        request.challenge_title.trim(),
        request.problem_statement.trim(),
        &request.code,
    )
    .await;
    Ok(Json(ReviewResponse { review }))
}
