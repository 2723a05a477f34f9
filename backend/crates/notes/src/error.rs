//! Notes Error Types
//!
//! This module provides notes-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::token::TokenError;
use thiserror::Error;

/// Notes-specific result type alias
pub type NotesResult<T> = Result<T, NotesError>;

/// Notes-specific error variants
#[derive(Debug, Error)]
pub enum NotesError {
    /// Malformed or missing input
    #[error("{0}")]
    Validation(String),

    /// Note does not exist, or belongs to another user
    ///
    /// The two cases are deliberately indistinguishable.
    #[error("Note not found")]
    NoteNotFound,

    /// No bearer token on the request
    #[error("Missing authorization token")]
    MissingToken,

    /// Bearer token malformed, forged, or expired
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl NotesError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            NotesError::Validation(_) => StatusCode::BAD_REQUEST,
            NotesError::NoteNotFound => StatusCode::NOT_FOUND,
            NotesError::MissingToken | NotesError::InvalidToken => StatusCode::UNAUTHORIZED,
            NotesError::Database(_) | NotesError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            NotesError::Validation(_) => ErrorKind::BadRequest,
            NotesError::NoteNotFound => ErrorKind::NotFound,
            NotesError::MissingToken | NotesError::InvalidToken => ErrorKind::Unauthorized,
            NotesError::Database(_) | NotesError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            NotesError::Database(e) => {
                tracing::error!(error = %e, "Notes database error");
            }
            NotesError::Internal(msg) => {
                tracing::error!(message = %msg, "Notes internal error");
            }
            NotesError::InvalidToken => {
                tracing::warn!("Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Notes error");
            }
        }
    }
}

impl IntoResponse for NotesError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for NotesError {
    fn from(err: AppError) -> Self {
        // Value-object validation surfaces as 400; anything else is a bug
        match err.kind() {
            ErrorKind::BadRequest => NotesError::Validation(err.message().to_string()),
            _ => NotesError::Internal(err.to_string()),
        }
    }
}

impl From<TokenError> for NotesError {
    fn from(_: TokenError) -> Self {
        // Malformed, forged, and expired all collapse to the same 401
        NotesError::InvalidToken
    }
}
