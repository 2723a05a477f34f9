//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordPolicyError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed or missing input
    #[error("{0}")]
    Validation(String),

    /// Email already registered to another account
    #[error("Email is already registered")]
    EmailTaken,

    /// Device already bound to another account
    #[error("Device is already linked to another account")]
    DeviceTaken,

    /// Wrong email or password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Login from a device other than the bound one
    #[error("This account is linked to another device. Unlink the device to sign in here.")]
    DeviceMismatch,

    /// Reset token missing, wrong, or past its expiry
    ///
    /// Deliberately does not distinguish the three cases (anti-enumeration).
    #[error("Invalid or expired token")]
    InvalidResetToken,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::EmailTaken | AuthError::DeviceTaken => StatusCode::CONFLICT,
            AuthError::InvalidCredentials | AuthError::InvalidResetToken => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::DeviceMismatch => StatusCode::FORBIDDEN,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::EmailTaken | AuthError::DeviceTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::InvalidResetToken => ErrorKind::Unauthorized,
            AuthError::DeviceMismatch => ErrorKind::Forbidden,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::DeviceMismatch => {
                tracing::warn!("Login attempt from a non-bound device");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        // Value-object validation surfaces as 400; anything else is a bug
        match err.kind() {
            ErrorKind::BadRequest => AuthError::Validation(err.message().to_string()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}

impl From<PasswordPolicyError> for AuthError {
    fn from(err: PasswordPolicyError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(AuthError::DeviceTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::InvalidResetToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::DeviceMismatch.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AuthError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_from_app_error() {
        let err: AuthError = AppError::bad_request("Invalid email").into();
        assert!(matches!(err, AuthError::Validation(ref m) if m == "Invalid email"));
    }

    #[test]
    fn test_password_policy_maps_to_validation() {
        let err: AuthError = PasswordPolicyError::TooShort { min: 6 }.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }
}
