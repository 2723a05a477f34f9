//! Register Use Case
//!
//! Creates a new user account and signs it in.

use std::sync::Arc;

use platform::password::{ClearTextPassword, PasswordDigest};

use crate::application::access_token;
use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{device_id::DeviceId, email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Device to bind immediately, if the client supplies one
    pub device_id: Option<String>,
}

/// Register output
pub struct RegisterOutput {
    /// Bearer token for the fresh account
    pub token: String,
    pub user: User,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Field validation, in the order clients expect the messages
        let name = UserName::new(input.name)?;
        let email = Email::new(input.email)?;
        let password = ClearTextPassword::new(input.password)?;

        // An empty device field means "no device presented"
        let device_id = match input.device_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(DeviceId::new(raw)?),
        };

        // Friendly pre-check; the unique index settles any race
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let user = User::new(
            name,
            email,
            PasswordDigest::from_clear_text(&password),
            device_id,
        );

        self.repo.create(&user).await?;

        let token = access_token::issue(&self.config, &user.user_id);

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(RegisterOutput { token, user })
    }
}
