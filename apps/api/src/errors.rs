use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::config::Config;
use crate::llm::chain::FailedAttempt;
use crate::llm::truncate_body;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Wire shape is `{error, details?}`: `error` is a stable human-readable
/// summary, `details` carries diagnostics (missing keys, truncated upstream
/// bodies, per-provider failure reasons).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No LLM provider configured (missing {missing})")]
    NoProviderConfigured { missing: String },

    #[error("Provider {provider} rejected credentials: {message}")]
    UpstreamAuthRejected {
        provider: &'static str,
        message: String,
    },

    #[error("Provider {provider} request failed: {details}")]
    UpstreamRequestFailed {
        provider: &'static str,
        details: String,
    },

    #[error("All providers failed: {summary}")]
    AllProvidersFailed { summary: String },
}

impl AppError {
    /// Builds `NoProviderConfigured` naming the credential(s) absent from
    /// the environment.
    pub fn no_provider(config: &Config) -> Self {
        AppError::NoProviderConfigured {
            missing: config.missing_provider_keys().join(", "),
        }
    }

    /// Maps an exhausted provider chain to the right error variant.
    ///
    /// A single-provider chain surfaces its one failure directly (401 for
    /// auth, 502 otherwise); a multi-provider chain that ran dry reports
    /// every attempt.
    pub fn from_attempts(attempts: Vec<FailedAttempt>) -> Self {
        // Callers check for an unconfigured chain first; an empty attempt
        // list still gets a usable diagnostic instead of a blank summary.
        if attempts.is_empty() {
            return AppError::AllProvidersFailed {
                summary: "no providers were attempted".to_string(),
            };
        }

        if attempts.len() == 1 {
            let attempt = &attempts[0];
            if attempt.error.is_auth() {
                return AppError::UpstreamAuthRejected {
                    provider: attempt.provider,
                    message: attempt.error.to_string(),
                };
            }
            return AppError::UpstreamRequestFailed {
                provider: attempt.provider,
                details: truncate_body(&attempt.error.to_string()),
            };
        }

        let summary = attempts
            .iter()
            .map(|a| format!("{}: {}", a.provider, a.error))
            .collect::<Vec<_>>()
            .join("; ");
        AppError::AllProvidersFailed {
            summary: truncate_body(&summary),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::NoProviderConfigured { missing } => {
                tracing::error!("no LLM provider configured; missing {missing}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server has no LLM provider configured.".to_string(),
                    Some(format!("missing {missing}")),
                )
            }
            AppError::UpstreamAuthRejected { provider, message } => {
                tracing::error!("provider {provider} rejected credentials: {message}");
                (
                    StatusCode::UNAUTHORIZED,
                    "Upstream provider rejected the server's credentials.".to_string(),
                    Some(format!("{provider}: {message}")),
                )
            }
            AppError::UpstreamRequestFailed { provider, details } => {
                tracing::error!("provider {provider} request failed: {details}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Upstream AI request failed.".to_string(),
                    Some(format!("{provider}: {details}")),
                )
            }
            AppError::AllProvidersFailed { summary } => {
                tracing::error!("all providers failed: {summary}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "All configured AI providers failed.".to_string(),
                    Some(summary),
                )
            }
        };

        let body = match details {
            Some(details) => Json(json!({ "error": error, "details": details })),
            None => Json(json!({ "error": error })),
        };

        (status, body).into_response()
    }
}
