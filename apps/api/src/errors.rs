use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// External advisor service rejected the request for billing/quota reasons.
    /// Kept separate from `Llm` so the user sees an actionable message.
    #[error("Quota exceeded: {0}")]
    Quota(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Quota(msg) => {
                tracing::error!("Advisor quota error: {msg}");
                (
                    StatusCode::PAYMENT_REQUIRED,
                    "QUOTA_EXCEEDED",
                    "The career advisor service is unavailable due to API quota or billing limits"
                        .to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "Failed to get career recommendations".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
