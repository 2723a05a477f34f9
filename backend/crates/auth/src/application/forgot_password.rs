//! Forgot Password Use Case
//!
//! Issues a recovery token for an account. The caller receives the same
//! generic success whether or not the account exists - this endpoint must
//! not disclose which emails are registered. The token itself is only
//! written to the store (and the debug log); delivery is out of scope.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Forgot password input
pub struct ForgotPasswordInput {
    pub email: String,
}

/// Forgot password use case
pub struct ForgotPasswordUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> ForgotPasswordUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Returns `Ok(())` for known and unknown accounts alike
    pub async fn execute(&self, input: ForgotPasswordInput) -> AuthResult<()> {
        if input.email.trim().is_empty() {
            return Err(AuthError::Validation("Email is required".to_string()));
        }

        // A malformed address matches no account; same generic success
        let Ok(email) = Email::new(input.email) else {
            return Ok(());
        };

        let Some(mut user) = self.repo.find_by_email(&email).await? else {
            return Ok(());
        };

        let token = user.issue_reset_token(self.config.reset_token_ttl_chrono());
        self.repo.update(&user).await?;

        // Development convenience only - production delivery would go
        // through an email sender here
        tracing::debug!(
            user_id = %user.user_id,
            reset_token = %token,
            "Recovery token issued"
        );

        Ok(())
    }
}
