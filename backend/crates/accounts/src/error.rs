//! Accounts Error Types
//!
//! This module provides accounts-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Accounts-specific result type alias
pub type AccountsResult<T> = Result<T, AccountsError>;

/// Accounts-specific error variants
#[derive(Debug, Error)]
pub enum AccountsError {
    /// Wrong email or wrong password; deliberately indistinguishable
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Bearer token missing, malformed, expired, or signed with another key
    #[error("Invalid or expired token")]
    TokenInvalid,

    /// Actor lacks the required role
    #[error("Admin access required")]
    Forbidden,

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Email already registered to another account
    #[error("Email already in use")]
    EmailTaken,

    /// Admin seat limit would be exceeded
    #[error("Maximum number of admins ({max}) reached")]
    AdminLimitReached { max: usize },

    /// Admins cannot delete their own account
    #[error("You cannot delete your own account")]
    CannotDeleteSelf,

    /// The last remaining admin cannot be demoted
    #[error("Cannot demote the last admin")]
    LastAdmin,

    /// Input validation error (name, email format)
    #[error("{0}")]
    Validation(String),

    /// Password policy violation
    #[error("Password validation failed: {0}")]
    PasswordPolicy(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountsError::InvalidCredentials | AccountsError::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }
            AccountsError::Forbidden => StatusCode::FORBIDDEN,
            AccountsError::UserNotFound => StatusCode::NOT_FOUND,
            AccountsError::EmailTaken => StatusCode::CONFLICT,
            AccountsError::AdminLimitReached { .. }
            | AccountsError::CannotDeleteSelf
            | AccountsError::LastAdmin => StatusCode::UNPROCESSABLE_ENTITY,
            AccountsError::Validation(_) | AccountsError::PasswordPolicy(_) => {
                StatusCode::BAD_REQUEST
            }
            AccountsError::Database(_) | AccountsError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountsError::InvalidCredentials | AccountsError::TokenInvalid => {
                ErrorKind::Unauthorized
            }
            AccountsError::Forbidden => ErrorKind::Forbidden,
            AccountsError::UserNotFound => ErrorKind::NotFound,
            AccountsError::EmailTaken => ErrorKind::Conflict,
            AccountsError::AdminLimitReached { .. }
            | AccountsError::CannotDeleteSelf
            | AccountsError::LastAdmin => ErrorKind::UnprocessableEntity,
            AccountsError::Validation(_) | AccountsError::PasswordPolicy(_) => ErrorKind::BadRequest,
            AccountsError::Database(_) | AccountsError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountsError::Database(e) => {
                tracing::error!(error = %e, "Accounts database error");
            }
            AccountsError::Internal(msg) => {
                tracing::error!(message = %msg, "Accounts internal error");
            }
            AccountsError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AccountsError::AdminLimitReached { max } => {
                tracing::warn!(max_admins = max, "Admin seat limit hit");
            }
            _ => {
                tracing::debug!(error = %self, "Accounts error");
            }
        }
    }
}

impl IntoResponse for AccountsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AccountsError {
    fn from(err: AppError) -> Self {
        AccountsError::Internal(err.to_string())
    }
}
