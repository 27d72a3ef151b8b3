pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::aptitude::handlers::handle_explain;
use crate::coach::handlers::handle_coach;
use crate::interview::handlers::{handle_start, handle_step};
use crate::review::handlers::handle_review;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/coach", post(handle_coach))
        .route("/explain", post(handle_explain))
        .route("/interview/start", post(handle_start))
        .route("/interview/step", post(handle_step))
        .route("/review/code", post(handle_review))
        .with_state(state)
}
