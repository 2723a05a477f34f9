//! Password Digest and Verification
//!
//! The credential comparison contract is a deterministic one-way digest:
//! `verify` succeeds iff the same plaintext was digested. The digest is an
//! **unsalted, non-iterated SHA-256** of the raw password bytes.
//!
//! ## Known weak policy
//! This policy is preserved deliberately for contract compatibility: it has
//! no protection against precomputed-table attacks and identical passwords
//! produce identical digests. Do not reuse it outside this service without
//! substituting a salted, memory-hard hash.
//!
//! ## Hygiene
//! - Clear-text passwords are zeroized on drop and never cloned
//! - Digest comparison is constant-time

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{constant_time_eq, sha256_hex};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum password length in characters
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },

    /// Password is too long
    #[error("Password must be at most {max} characters")]
    TooLong { max: usize },

    /// Password contains only whitespace
    #[error("Password cannot be empty")]
    EmptyOrWhitespace,

    /// Password contains control characters
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Ensures that password data is securely erased from memory when the
/// value is dropped. Does not implement `Clone`, and `Debug` output is
/// redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password with policy validation
    ///
    /// Policy:
    /// - not empty / whitespace only
    /// - 6 to 128 characters (Unicode code points, not bytes)
    /// - no control characters
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = raw.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
            });
        }

        for ch in raw.chars() {
            if ch.is_control() {
                return Err(PasswordPolicyError::InvalidCharacter);
            }
        }

        Ok(Self(raw))
    }

    /// Get the password as bytes for digesting
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClearTextPassword(***)")
    }
}

// ============================================================================
// Password Digest
// ============================================================================

/// One-way password digest (lowercase hex SHA-256)
///
/// Equal plaintexts always yield equal digests; the plaintext is not
/// practically recoverable. See the module docs for the weak-policy note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Digest a validated clear-text password
    pub fn from_clear_text(password: &ClearTextPassword) -> Self {
        Self(sha256_hex(password.as_bytes()))
    }

    /// Reconstruct from a stored value (assumed already digested)
    pub fn from_db(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    /// True iff `candidate` digests to this value
    pub fn verify(&self, candidate: &ClearTextPassword) -> bool {
        let candidate_digest = sha256_hex(candidate.as_bytes());
        constant_time_eq(self.0.as_bytes(), candidate_digest.as_bytes())
    }

    /// Get the digest for database storage
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
