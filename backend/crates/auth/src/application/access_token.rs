//! Access Token Issuance and Validation
//!
//! Thin wrapper over the platform token codec: the subject is the user's
//! id, the window is [`AuthConfig::access_token_ttl`]. Tokens are
//! stateless; nothing server-side tracks or revokes them.

use chrono::Utc;
use kernel::id::UserId;
use platform::token::{self, TokenError};

use crate::application::config::AuthConfig;

/// Issue a bearer token for `user_id`, valid for the configured window
pub fn issue(config: &AuthConfig, user_id: &UserId) -> String {
    let expires_at_ms = Utc::now().timestamp_millis() + config.access_token_ttl_ms();
    token::sign(&config.token_secret, &user_id.to_string(), expires_at_ms)
}

/// Validate a bearer token, returning the user id it was issued for
///
/// Malformed token, bad signature, and expired token all fail; callers
/// map any failure to the same authentication-failure response.
pub fn verify(config: &AuthConfig, token_str: &str) -> Result<UserId, TokenError> {
    let subject = token::verify(
        &config.token_secret,
        token_str,
        Utc::now().timestamp_millis(),
    )?;

    UserId::parse_str(&subject).map_err(|_| TokenError::Malformed)
}
