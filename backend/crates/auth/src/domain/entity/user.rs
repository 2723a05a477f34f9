//! User Entity
//!
//! Account record holding credentials, the optional device binding, and
//! the password-reset token lifecycle.

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserId;
use platform::crypto::{constant_time_eq, random_token_hex};
use platform::password::{ClearTextPassword, PasswordDigest};

use crate::domain::value_object::{device_id::DeviceId, email::Email, user_name::UserName};

/// Number of random bytes behind a reset token (32 hex characters)
const RESET_TOKEN_BYTES: usize = 16;

/// User entity
///
/// Invariant: at most one reset token is live at a time. An expired but
/// uncleared token may still be persisted; it is logically invalid and
/// [`User::reset_token_matches`] rejects it.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier (string form is the public id)
    pub user_id: UserId,
    /// Display name
    pub name: UserName,
    /// Normalized email (unique across accounts)
    pub email: Email,
    /// One-way password digest - never exposed
    pub password: PasswordDigest,
    /// Bound device, if any (unique across accounts when set)
    pub device_id: Option<DeviceId>,
    /// Live recovery token, if a reset was requested
    pub reset_token: Option<String>,
    /// Expiry of the recovery token
    pub reset_token_expires_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    ///
    /// A device id supplied at registration is bound immediately.
    pub fn new(
        name: UserName,
        email: Email,
        password: PasswordDigest,
        device_id: Option<DeviceId>,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            password,
            device_id,
            reset_token: None,
            reset_token_expires_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// True iff `candidate` matches the stored credential
    pub fn verify_password(&self, candidate: &ClearTextPassword) -> bool {
        self.password.verify(candidate)
    }

    /// Replace the stored credential
    pub fn set_password(&mut self, digest: PasswordDigest) {
        self.password = digest;
        self.updated_at = Utc::now();
    }

    /// Bind a device to this account
    pub fn bind_device(&mut self, device_id: DeviceId) {
        self.device_id = Some(device_id);
        self.updated_at = Utc::now();
    }

    /// Clear the device binding unconditionally
    pub fn unbind_device(&mut self) {
        self.device_id = None;
        self.updated_at = Utc::now();
    }

    /// Issue a new recovery token valid for `ttl`
    ///
    /// Overwrites any prior token - only one can be valid at a time.
    /// Returns the token so the caller can deliver it.
    pub fn issue_reset_token(&mut self, ttl: Duration) -> String {
        let token = random_token_hex(RESET_TOKEN_BYTES);
        let now = Utc::now();

        self.reset_token = Some(token.clone());
        self.reset_token_expires_at = Some(now + ttl);
        self.updated_at = now;

        token
    }

    /// True iff a token is stored, `candidate` matches it exactly, and the
    /// current time is strictly before the stored expiry
    ///
    /// Non-consuming; does not distinguish wrong from expired from absent.
    pub fn reset_token_matches(&self, candidate: &str) -> bool {
        let (Some(token), Some(expires_at)) = (&self.reset_token, self.reset_token_expires_at)
        else {
            return false;
        };

        if !constant_time_eq(token.as_bytes(), candidate.as_bytes()) {
            return false;
        }

        Utc::now() < expires_at
    }

    /// Clear the stored token and expiry unconditionally
    pub fn clear_reset_token(&mut self) {
        self.reset_token = None;
        self.reset_token_expires_at = None;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new(
            UserName::new("Ann").unwrap(),
            Email::new("ann@x.com").unwrap(),
            PasswordDigest::from_clear_text(
                &ClearTextPassword::new("secret1".to_string()).unwrap(),
            ),
            None,
        )
    }

    #[test]
    fn test_new_user_defaults() {
        let user = test_user();
        assert!(user.device_id.is_none());
        assert!(user.reset_token.is_none());
        assert!(user.reset_token_expires_at.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_verify_password() {
        let user = test_user();
        assert!(user.verify_password(&ClearTextPassword::new("secret1".to_string()).unwrap()));
        assert!(!user.verify_password(&ClearTextPassword::new("secret2".to_string()).unwrap()));
    }

    #[test]
    fn test_reset_token_lifecycle() {
        let mut user = test_user();

        let token = user.issue_reset_token(Duration::hours(1));
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));

        // Non-consuming verify
        assert!(user.reset_token_matches(&token));
        assert!(user.reset_token_matches(&token));
        assert!(!user.reset_token_matches("0000000000000000"));

        user.clear_reset_token();
        assert!(!user.reset_token_matches(&token));
        assert!(user.reset_token.is_none());
        assert!(user.reset_token_expires_at.is_none());
    }

    #[test]
    fn test_reset_token_reissue_overwrites() {
        let mut user = test_user();

        let first = user.issue_reset_token(Duration::hours(1));
        let second = user.issue_reset_token(Duration::hours(1));

        assert_ne!(first, second);
        assert!(!user.reset_token_matches(&first));
        assert!(user.reset_token_matches(&second));
    }

    #[test]
    fn test_reset_token_expiry() {
        let mut user = test_user();

        let token = user.issue_reset_token(Duration::hours(1));
        assert!(user.reset_token_matches(&token));

        // Push the stored expiry into the past: the persisted-but-expired
        // token is logically invalid
        user.reset_token_expires_at = Some(Utc::now() - Duration::seconds(1));
        assert!(!user.reset_token_matches(&token));

        // A minute of validity left is still fine
        user.reset_token_expires_at = Some(Utc::now() + Duration::minutes(1));
        assert!(user.reset_token_matches(&token));
    }

    #[test]
    fn test_absent_token_never_matches() {
        let user = test_user();
        assert!(!user.reset_token_matches(""));
        assert!(!user.reset_token_matches("anything"));
    }

    #[test]
    fn test_device_binding_mutators() {
        let mut user = test_user();

        user.bind_device(DeviceId::new("pixel-7").unwrap());
        assert_eq!(user.device_id.as_ref().unwrap().as_str(), "pixel-7");

        user.unbind_device();
        assert!(user.device_id.is_none());
    }

    #[test]
    fn test_set_password_refreshes_updated_at() {
        let mut user = test_user();
        let before = user.updated_at;

        user.set_password(PasswordDigest::from_clear_text(
            &ClearTextPassword::new("secret2".to_string()).unwrap(),
        ));

        assert!(user.updated_at >= before);
        assert!(user.verify_password(&ClearTextPassword::new("secret2".to_string()).unwrap()));
    }
}
