//! Structured error handling for API responses.
//!
//! Provides [`AppError`] as the shared application error type and
//! [`ErrorResponse`] as the JSON body every error renders to.

pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;
pub use handlers::{method_not_allowed, not_found};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard JSON error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Numeric code for logging and monitoring
    pub code: i32,
    /// Stable string identifier, e.g. "VALIDATION_ERROR"
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Optional structured details (e.g. per-field validation errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code, code.default_message())
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Shared application error.
///
/// Domain crates convert their own error enums into `AppError`, which
/// knows how to render itself as an HTTP response.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    ValidationError(#[from] validator::ValidationErrors),

    #[error(transparent)]
    UuidError(#[from] uuid::Error),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    ServiceUnavailable(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) | Self::UuidError(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::SerdeJson(_) | Self::Io(_) | Self::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_code(&self) -> ErrorCode {
        match self {
            Self::ValidationError(_) => ErrorCode::ValidationError,
            Self::UuidError(_) => ErrorCode::InvalidUuid,
            Self::BadRequest(_) => ErrorCode::ValidationError,
            Self::Unauthorized(_) => ErrorCode::Unauthorized,
            Self::Forbidden(_) => ErrorCode::Forbidden,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Conflict(_) => ErrorCode::Conflict,
            Self::ServiceUnavailable(_) => ErrorCode::ServiceUnavailable,
            Self::SerdeJson(_) => ErrorCode::SerdeJsonError,
            Self::Io(_) => ErrorCode::IoError,
            Self::InternalServerError(_) => ErrorCode::InternalError,
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::ValidationError(errors) => serde_json::to_value(errors.field_errors()).ok(),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
        }

        let code = self.error_code();
        let mut body = ErrorResponse::new(code, self.to_string());
        body.details = self.details();

        (status, Json(body)).into_response()
    }
}
