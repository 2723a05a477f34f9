//! Login Use Case
//!
//! Authenticates a user, applies the device-binding policy, and issues a
//! bearer token. Each successful login issues an independent token; older
//! tokens stay valid until their own expiry.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::access_token;
use crate::application::config::AuthConfig;
use crate::domain::device_binding::{self, BindingDecision};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{device_id::DeviceId, email::Email};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
    /// Device presented by the client, if any
    pub device_id: Option<String>,
}

/// Login output
pub struct LoginOutput {
    pub token: String,
    pub user: User,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        // An email or password that cannot possibly match a stored
        // credential is just a failed login, not a validation error
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

        // An empty device field means "no device presented"
        let presented = match input.device_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(DeviceId::new(raw)?),
        };

        match device_binding::evaluate(user.device_id.as_ref(), presented.as_ref()) {
            BindingDecision::Reject => return Err(AuthError::DeviceMismatch),
            BindingDecision::Bind => {
                // First device to log in wins, silently
                if let Some(device) = presented {
                    tracing::info!(
                        user_id = %user.user_id,
                        device_id = %device,
                        "Binding device to account"
                    );
                    user.bind_device(device);
                    self.repo.update(&user).await?;
                }
            }
            BindingDecision::Accept => {}
        }

        let token = access_token::issue(&self.config, &user.user_id);

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput { token, user })
    }
}
