//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    ForgotPasswordInput, ForgotPasswordUseCase, LoginInput, LoginUseCase, RegisterInput,
    RegisterUseCase, ResetPasswordInput, ResetPasswordUseCase, UnlinkDeviceInput,
    UnlinkDeviceUseCase, VerifyResetTokenInput, VerifyResetTokenUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
    RegisterResponse, ResetPasswordRequest, UnlinkDeviceRequest, UserDto,
    VerifyResetTokenRequest, VerifyResetTokenResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Unwrap a JSON body, converting extractor rejections into 400s with the
/// standard `{"error": ...}` shape
fn require_json<T>(payload: Result<Json<T>, JsonRejection>) -> AuthResult<T> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(AuthError::Validation(rejection.body_text())),
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let req = require_json(payload)?;

    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        name: req.name,
        email: req.email,
        password: req.password,
        device_id: req.device_id,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "User registered successfully".to_string(),
            token: output.token,
            user: UserDto::from(&output.user),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let req = require_json(payload)?;

    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email,
        password: req.password,
        device_id: req.device_id,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        token: output.token,
        user: UserDto::from(&output.user),
    }))
}

// ============================================================================
// Password reset flow
// ============================================================================

/// POST /api/auth/forgot-password
///
/// Responds with the same generic success whether or not the account
/// exists.
pub async fn forgot_password<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<ForgotPasswordRequest>, JsonRejection>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let req = require_json(payload)?;

    let use_case = ForgotPasswordUseCase::new(state.repo.clone(), state.config.clone());

    use_case
        .execute(ForgotPasswordInput { email: req.email })
        .await?;

    Ok(Json(MessageResponse::new(
        "If the email exists, a recovery code has been issued",
    )))
}

/// POST /api/auth/verify-reset-token
pub async fn verify_reset_token<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<VerifyResetTokenRequest>, JsonRejection>,
) -> AuthResult<Json<VerifyResetTokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let req = require_json(payload)?;

    let use_case = VerifyResetTokenUseCase::new(state.repo.clone());

    use_case
        .execute(VerifyResetTokenInput {
            email: req.email,
            token: req.token,
        })
        .await?;

    Ok(Json(VerifyResetTokenResponse { valid: true }))
}

/// POST /api/auth/reset-password
pub async fn reset_password<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<ResetPasswordRequest>, JsonRejection>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let req = require_json(payload)?;

    let use_case = ResetPasswordUseCase::new(state.repo.clone());

    use_case
        .execute(ResetPasswordInput {
            email: req.email,
            token: req.token,
            new_password: req.new_password,
        })
        .await?;

    Ok(Json(MessageResponse::new("Password updated successfully")))
}

// ============================================================================
// Device unlink
// ============================================================================

/// POST /api/auth/unlink-device
pub async fn unlink_device<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<UnlinkDeviceRequest>, JsonRejection>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let req = require_json(payload)?;

    let use_case = UnlinkDeviceUseCase::new(state.repo.clone());

    use_case
        .execute(UnlinkDeviceInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(MessageResponse::new("Device unlinked successfully")))
}
