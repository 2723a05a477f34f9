//! UserName Value Object
//!
//! Display name supplied at registration. Trimmed; 3 to 100 characters.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Minimum name length in characters
const NAME_MIN_LENGTH: usize = 3;

/// Maximum name length in characters
const NAME_MAX_LENGTH: usize = 100;

/// User display name value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into().trim().to_string();

        let char_count = name.chars().count();

        if char_count < NAME_MIN_LENGTH {
            return Err(AppError::bad_request(format!(
                "Name must be at least {} characters",
                NAME_MIN_LENGTH
            )));
        }

        if char_count > NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Name must be at most {} characters",
                NAME_MAX_LENGTH
            )));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_valid() {
        assert_eq!(UserName::new("Ann Lee").unwrap().as_str(), "Ann Lee");
        assert_eq!(UserName::new("  Ann  ").unwrap().as_str(), "Ann");
        assert!(UserName::new("abc").is_ok());
    }

    #[test]
    fn test_user_name_too_short() {
        assert!(UserName::new("").is_err());
        assert!(UserName::new("ab").is_err());
        // Whitespace padding does not count
        assert!(UserName::new("  a  ").is_err());
    }

    #[test]
    fn test_user_name_too_long() {
        assert!(UserName::new("x".repeat(101)).is_err());
        assert!(UserName::new("x".repeat(100)).is_ok());
    }

    #[test]
    fn test_user_name_counts_characters() {
        // 3 multibyte characters are enough
        assert!(UserName::new("日本語").is_ok());
    }
}
