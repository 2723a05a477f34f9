//! Domain Value Objects
//!
//! Note fields are trimmed before validation; a whitespace-only title or
//! content is as invalid as an absent one. The image URL is stored as
//! supplied, with no validation.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum title length in characters
const TITLE_MAX_LENGTH: usize = 200;

/// Note title value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteTitle(String);

impl NoteTitle {
    /// Create a new title with validation (trimmed, non-empty)
    pub fn new(title: impl Into<String>) -> AppResult<Self> {
        let title = title.into().trim().to_string();

        if title.is_empty() {
            return Err(AppError::bad_request("Title is required"));
        }

        if title.chars().count() > TITLE_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Title must be at most {} characters",
                TITLE_MAX_LENGTH
            )));
        }

        Ok(Self(title))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Get the title as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NoteTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Note content value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteContent(String);

impl NoteContent {
    /// Create new content with validation (trimmed, non-empty)
    pub fn new(content: impl Into<String>) -> AppResult<Self> {
        let content = content.into().trim().to_string();

        if content.is_empty() {
            return Err(AppError::bad_request("Content is required"));
        }

        Ok(Self(content))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    /// Get the content as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NoteContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
