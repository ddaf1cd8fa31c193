use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    #[validate(custom(function = "not_blank"))]
    pub login_or_email: String,

    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

/// Request to start password recovery.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordRecoveryDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Request to set a new password with a recovery code.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPasswordDto {
    #[validate(length(min = 6, max = 20, message = "Password must be 6-20 characters"))]
    pub new_password: String,

    #[validate(custom(function = "not_blank"))]
    pub recovery_code: String,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// The authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user_id: String,
    pub login: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_uses_camel_case() {
        let json = serde_json::to_value(AuthResponse {
            access_token: "token".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
        })
        .unwrap();

        assert_eq!(json["accessToken"], "token");
        assert_eq!(json["tokenType"], "Bearer");
        assert_eq!(json["expiresIn"], 3600);
        assert!(json.get("access_token").is_none());
    }
}
