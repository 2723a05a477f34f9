//! API DTOs (Data Transfer Objects)
//!
//! The user JSON shape is `{id, name, email}` - no password material of
//! any kind crosses this boundary, and ids are serialized as strings.

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Device to bind immediately
    pub device_id: Option<String>,
}

/// Register response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: UserDto,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub device_id: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserDto,
}

// ============================================================================
// Password reset flow
// ============================================================================

/// Forgot password request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Verify reset token request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResetTokenRequest {
    pub email: String,
    pub token: String,
}

/// Verify reset token response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResetTokenResponse {
    pub valid: bool,
}

/// Reset password request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub token: String,
    pub new_password: String,
}

// ============================================================================
// Device unlink
// ============================================================================

/// Unlink device request (re-authenticates with credentials, not bearer)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlinkDeviceRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Shared shapes
// ============================================================================

/// Generic message response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Public user shape
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{email::Email, user_name::UserName};
    use platform::password::{ClearTextPassword, PasswordDigest};

    #[test]
    fn test_user_dto_shape() {
        let user = User::new(
            UserName::new("Ann").unwrap(),
            Email::new("Ann@X.com").unwrap(),
            PasswordDigest::from_clear_text(
                &ClearTextPassword::new("secret1".to_string()).unwrap(),
            ),
            None,
        );

        let json = serde_json::to_value(UserDto::from(&user)).unwrap();
        let obj = json.as_object().unwrap();

        // Exactly id/name/email - nothing credential-shaped
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["id"], user.user_id.to_string());
        assert_eq!(obj["name"], "Ann");
        assert_eq!(obj["email"], "ann@x.com");
    }

    #[test]
    fn test_register_request_camel_case() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"name":"Ann","email":"ann@x.com","password":"secret1","deviceId":"pixel-7"}"#,
        )
        .unwrap();

        assert_eq!(req.device_id.as_deref(), Some("pixel-7"));
    }

    #[test]
    fn test_login_request_device_optional() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"email":"ann@x.com","password":"secret1"}"#).unwrap();
        assert!(req.device_id.is_none());
    }

    #[test]
    fn test_message_response_shape() {
        let json = serde_json::to_value(MessageResponse::new("Device unlinked successfully"))
            .unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Device unlinked successfully");
    }
}
