//! Notice Error Types
//!
//! This module provides notice-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_objects::NoticeValidationError;

/// Notice-specific result type alias
pub type NoticeResult<T> = Result<T, NoticeError>;

/// Notice-specific error variants
#[derive(Debug, Error)]
pub enum NoticeError {
    /// No valid bearer token on a route that requires one
    #[error("Authentication required")]
    Unauthenticated,

    /// Actor's role does not allow this operation
    #[error("You do not have permission to perform this action")]
    Forbidden,

    /// Notice not found
    #[error("Notice not found")]
    NoticeNotFound,

    /// Title or content failed validation
    #[error(transparent)]
    Validation(#[from] NoticeValidationError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl NoticeError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            NoticeError::Unauthenticated => StatusCode::UNAUTHORIZED,
            NoticeError::Forbidden => StatusCode::FORBIDDEN,
            NoticeError::NoticeNotFound => StatusCode::NOT_FOUND,
            NoticeError::Validation(_) => StatusCode::BAD_REQUEST,
            NoticeError::Database(_) | NoticeError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            NoticeError::Unauthenticated => ErrorKind::Unauthorized,
            NoticeError::Forbidden => ErrorKind::Forbidden,
            NoticeError::NoticeNotFound => ErrorKind::NotFound,
            NoticeError::Validation(_) => ErrorKind::BadRequest,
            NoticeError::Database(_) | NoticeError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            NoticeError::Database(e) => {
                tracing::error!(error = %e, "Notice database error");
            }
            NoticeError::Internal(msg) => {
                tracing::error!(message = %msg, "Notice internal error");
            }
            NoticeError::Forbidden => {
                tracing::warn!("Notice permission denied");
            }
            _ => {
                tracing::debug!(error = %self, "Notice error");
            }
        }
    }
}

impl IntoResponse for NoticeError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
