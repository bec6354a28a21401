//! Unified error handling for HTTP and gRPC.
//!
//! Provides a single error type that can be converted to:
//! - Axum HTTP responses (JSON API)
//! - Tonic gRPC status codes (AuthorService)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tonic::Status;

/// Application error types with support for both HTTP and gRPC.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    // Remote quote service refused or failed the cascade
    #[error("{0}")]
    CascadeFailure(String),

    // Storage / network fault in the persistence backend
    #[error("Storage backend error: {0}")]
    Backend(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Startup
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::AlreadyExists(_) => "ALREADY_EXISTS",
            AppError::CascadeFailure(_) => "CASCADE_FAILURE",
            AppError::Backend(_) => "BACKEND_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::CascadeFailure(_) => StatusCode::BAD_GATEWAY,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get gRPC status code
    pub fn grpc_code(&self) -> tonic::Code {
        match self {
            AppError::NotFound(_) => tonic::Code::NotFound,
            AppError::AlreadyExists(_) => tonic::Code::AlreadyExists,
            AppError::CascadeFailure(_) => tonic::Code::FailedPrecondition,
            AppError::Validation(_) => tonic::Code::InvalidArgument,
            _ => tonic::Code::Internal,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Backend(msg) => {
                tracing::error!("Storage backend error: {}", msg);
                "A storage backend error occurred".to_string()
            }
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {}", msg);
                "The service is misconfigured".to_string()
            }

            // Not-found, conflict and cascade messages stay verbatim so callers
            // can tell "quotes not deleted" from "author not deleted"
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// gRPC Status (Tonic)
// =============================================================================

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        Status::new(err.grpc_code(), err.user_message())
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(_) => AppError::NotFound(err.to_string()),
            DomainError::AlreadyExists(_) => AppError::AlreadyExists(err.to_string()),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn not_found(id: impl Into<String>) -> Self {
        DomainError::not_found(id).into()
    }

    pub fn already_exists(id: impl Into<String>) -> Self {
        DomainError::already_exists(id).into()
    }

    pub fn cascade(msg: impl Into<String>) -> Self {
        AppError::CascadeFailure(msg.into())
    }

    pub fn backend(msg: impl ToString) -> Self {
        AppError::Backend(msg.to_string())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_not_found_message_names_author() {
        let err = AppError::not_found("123");
        assert_eq!(err.to_string(), "author \"123\" does not exist");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_grpc_codes() {
        assert_eq!(
            Status::from(AppError::already_exists("1")).code(),
            tonic::Code::AlreadyExists
        );
        assert_eq!(
            Status::from(AppError::cascade("quote service down")).code(),
            tonic::Code::FailedPrecondition
        );
        assert_eq!(
            Status::from(AppError::backend("socket closed")).code(),
            tonic::Code::Internal
        );
        assert_eq!(
            Status::from(AppError::config("bad keyspace")).code(),
            tonic::Code::Internal
        );
        assert_eq!(
            AppError::config("bad keyspace").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_backend_details_are_hidden() {
        let status = Status::from(AppError::backend("connection refused at 10.0.0.3"));
        assert_eq!(status.message(), "A storage backend error occurred");
    }

    #[test]
    fn test_cascade_message_is_kept() {
        let status = Status::from(AppError::cascade("quotes for author \"1\" not deleted"));
        assert_eq!(status.message(), "quotes for author \"1\" not deleted");
    }

    #[tokio::test]
    async fn test_http_error_body() {
        let response = AppError::already_exists("123").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error.code, "ALREADY_EXISTS");
        assert_eq!(body.error.message, "author \"123\" already exists");
    }
}
