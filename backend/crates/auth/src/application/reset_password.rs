//! Reset Password Use Case
//!
//! Replaces an account's password using a recovery token, consuming the
//! token. Outstanding bearer tokens are deliberately left valid for their
//! remaining window.

use std::sync::Arc;

use platform::password::{ClearTextPassword, PasswordDigest};

use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Reset password input
pub struct ResetPasswordInput {
    pub email: String,
    pub token: String,
    pub new_password: String,
}

/// Reset password use case
pub struct ResetPasswordUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ResetPasswordUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: ResetPasswordInput) -> AuthResult<()> {
        if input.email.trim().is_empty() || input.token.is_empty() || input.new_password.is_empty()
        {
            return Err(AuthError::Validation(
                "Email, token and new password are required".to_string(),
            ));
        }

        // The replacement password must meet policy (400), unlike the
        // token check below (generic 401)
        let new_password = ClearTextPassword::new(input.new_password)?;

        let email = Email::new(input.email).map_err(|_| AuthError::InvalidResetToken)?;

        let mut user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidResetToken)?;

        if !user.reset_token_matches(&input.token) {
            return Err(AuthError::InvalidResetToken);
        }

        // Single-use: the token is cleared with the password change, in
        // one atomic store write
        user.set_password(PasswordDigest::from_clear_text(&new_password));
        user.clear_reset_token();
        self.repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, "Password reset completed");

        Ok(())
    }
}
