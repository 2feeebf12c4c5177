//! Global application error types and handlers.
//!
//! This module defines the error type returned by every handler and maps each
//! variant onto an HTTP status and a JSON body. Store failures are logged in full
//! but reach the client only as a generic message.

use adapters::AdapterError;
use axum::{
    extract::rejection::{FormRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::auth::AuthError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("document store error: {0}")]
    Store(#[from] AdapterError),

    /// The request could not be extracted (wrong content type, bad query...).
    #[error("rejected request ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
}

macro_rules! from_rejection {
    ($($rejection:ty),+) => {
        $(
            impl From<$rejection> for AppError {
                fn from(rejection: $rejection) -> Self {
                    AppError::Rejected {
                        status: rejection.status(),
                        message: rejection.body_text(),
                    }
                }
            }
        )+
    };
}

from_rejection!(FormRejection, QueryRejection, PathRejection);

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Auth(AuthError::Unauthenticated) => StatusCode::UNAUTHORIZED,
            AppError::Auth(AuthError::Denied(_)) => StatusCode::FORBIDDEN,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Rejected { status, .. } => *status,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::NotFound(_) => "not_found",
            AppError::Auth(AuthError::Unauthenticated) => "unauthenticated",
            AppError::Auth(AuthError::Denied(_)) => "authorization_denied",
            AppError::Store(_) => "internal_error",
            AppError::Rejected { .. } => "invalid_request",
        }
    }

    /// Message safe to return to clients. Rejections keep their reason; store
    /// failures do not leak details.
    pub fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(reason) | AppError::NotFound(reason) => reason.clone(),
            AppError::Auth(AuthError::Denied(reason)) => reason.clone(),
            AppError::Auth(AuthError::Unauthenticated) => "authentication required".to_string(),
            AppError::Store(_) => "internal error".to_string(),
            AppError::Rejected { message, .. } => message.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Store(err) = &self {
            error!(error = %err, "request failed on the document store");
        }

        let body = json!({
            "error": self.error_code(),
            "message": self.client_message(),
        });

        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::InvalidInput("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(AuthError::Unauthenticated).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(AuthError::Denied("no".into())).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::from(AdapterError::Transport("down".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_messages_are_sanitized() {
        let err = AppError::from(AdapterError::Decode("document abc123: missing field".into()));
        assert_eq!(err.client_message(), "internal error");
        assert!(err.to_string().contains("abc123"));

        let err = AppError::from(AuthError::Denied("students may not submit attendance as 'Professor'".into()));
        assert!(err.client_message().contains("Professor"));
        assert_eq!(err.error_code(), "authorization_denied");
    }

    #[tokio::test]
    async fn test_response_body() {
        let response = AppError::NotFound("course c9 does not exist".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "course c9 does not exist");
    }

    #[test]
    fn test_rejection_keeps_its_status() {
        let err = AppError::Rejected {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: "wrong content type".into(),
        };
        assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(err.error_code(), "invalid_request");
        assert_eq!(err.client_message(), "wrong content type");
    }
}
