//! Application error taxonomy and HTTP response mapping.
//!
//! Client-facing failures (validation, authorization, cooldown, bad verbs)
//! are returned as plain text; store failures are returned as a JSON body
//! carrying the underlying driver message. Every variant maps to exactly
//! one status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body used for store-level failures.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed request fields. 400, plain text.
    #[error("{message}")]
    BadRequest { message: String },

    /// Admin credential mismatch. 403, plain text.
    #[error("{message}")]
    Forbidden { message: String },

    /// Comment cooldown still running. 429, plain text.
    #[error("{message}")]
    RateLimited { message: String },

    /// Store failure. 500, JSON `{"error": "..."}` with the driver message.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            AppError::Forbidden { message } => (StatusCode::FORBIDDEN, message).into_response(),
            AppError::RateLimited { message } => {
                (StatusCode::TOO_MANY_REQUESTS, message).into_response()
            }
            AppError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody { error: message }),
            )
                .into_response(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::bad_request("Bad request"), StatusCode::BAD_REQUEST),
            (
                AppError::forbidden("Forbidden: Wrong Auth Key"),
                StatusCode::FORBIDDEN,
            ),
            (
                AppError::rate_limited("Wait before commenting"),
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (
                AppError::internal("db gone"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[tokio::test]
    async fn test_internal_body_is_json_error_object() {
        let response = AppError::internal("db gone").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "db gone" }));
    }

    #[test]
    fn test_sqlx_error_carries_message() {
        let err: AppError = sqlx::Error::PoolClosed.into();
        match err {
            AppError::Internal { message } => assert!(!message.is_empty()),
            other => panic!("expected Internal, got {other:?}"),
        }
    }
}
