use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request to register or create a user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserDto {
    #[validate(
        length(min = 3, max = 10, message = "Login must be 3-10 characters"),
        custom(function = "login_charset")
    )]
    pub login: String,

    #[validate(length(min = 6, max = 20, message = "Password must be 6-20 characters"))]
    pub password: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

fn login_charset(login: &str) -> Result<(), ValidationError> {
    let allowed = login
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if allowed {
        return Ok(());
    }

    let mut error = ValidationError::new("charset");
    error.message = Some("Login may contain only letters, digits, '_' and '-'".into());
    Err(error)
}

/// Public information about a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub login: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
