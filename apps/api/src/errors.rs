use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Callers only ever see the short public message. Details of configuration,
/// downstream and internal failures go to the log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Generation credential is not configured")]
    MissingCredential,

    #[error("Generation service error: {0}")]
    Generation(LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::MissingApiKey => AppError::MissingCredential,
            other => AppError::Generation(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::MissingCredential => {
                tracing::error!("ANTHROPIC_API_KEY is not set; refusing to generate");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "missing credential".to_string(),
                )
            }
            AppError::Generation(e) => {
                tracing::error!("Generation service error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "generation service failure".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 10_000)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_is_400_with_message() {
        let (status, body) = body_of(AppError::Validation("references required".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "references required");
    }

    #[tokio::test]
    async fn test_missing_api_key_maps_to_missing_credential() {
        let err: AppError = LlmError::MissingApiKey.into();
        assert!(matches!(err, AppError::MissingCredential));

        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "missing credential");
    }

    #[tokio::test]
    async fn test_downstream_detail_is_not_exposed() {
        let err: AppError = LlmError::Api {
            status: 529,
            message: "secret upstream detail".into(),
        }
        .into();

        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "generation service failure");
        assert!(!body.to_string().contains("secret upstream detail"));
    }

    #[tokio::test]
    async fn test_empty_content_is_generation_failure() {
        let err: AppError = LlmError::EmptyContent.into();
        assert!(matches!(err, AppError::Generation(_)));
    }

    #[tokio::test]
    async fn test_internal_is_generic() {
        let (status, body) = body_of(AppError::Internal(anyhow::anyhow!("boom"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal error");
    }
}
