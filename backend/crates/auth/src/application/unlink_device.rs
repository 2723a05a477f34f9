//! Unlink Device Use Case
//!
//! Clears an account's device binding. Requires re-authentication with
//! email + password - a bearer token is not accepted here, which is the
//! accepted trust boundary of the one-device policy.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Unlink device input
pub struct UnlinkDeviceInput {
    pub email: String,
    pub password: String,
}

/// Unlink device use case
pub struct UnlinkDeviceUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> UnlinkDeviceUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UnlinkDeviceInput) -> AuthResult<()> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;
        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let mut user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.verify_password(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        // Unconditional: unbinding an unbound account is still a success
        user.unbind_device();
        self.repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, "Device unlinked");

        Ok(())
    }
}
