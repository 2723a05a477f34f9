//! Verify Reset Token Use Case
//!
//! Checks a recovery token without consuming it, so clients can validate
//! the code before asking the user for a new password.

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Verify reset token input
pub struct VerifyResetTokenInput {
    pub email: String,
    pub token: String,
}

/// Verify reset token use case
pub struct VerifyResetTokenUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> VerifyResetTokenUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: VerifyResetTokenInput) -> AuthResult<()> {
        if input.email.trim().is_empty() || input.token.is_empty() {
            return Err(AuthError::Validation(
                "Email and token are required".to_string(),
            ));
        }

        // Wrong token, expired token, unknown account, and malformed email
        // are all the same failure (anti-enumeration)
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidResetToken)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidResetToken)?;

        if !user.reset_token_matches(&input.token) {
            return Err(AuthError::InvalidResetToken);
        }

        Ok(())
    }
}
