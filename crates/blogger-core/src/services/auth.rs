use std::fmt;
use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use blogger_shared::dto::{
    AuthResponse, LoginDto, MeResponse, NewPasswordDto, PasswordRecoveryDto,
};

use crate::error::DomainError;
use crate::domain::User;
use crate::ports::{AuthError, PasswordService, TokenService, UserRepository};
use crate::validation::ValidationService;

use super::find_user_or_error;

/// What a verified recovery code resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveryTokenData {
    pub user_id: Uuid,
}

/// A password-recovery code. Formatting it never prints the token.
#[derive(Clone, PartialEq, Eq)]
pub struct RecoveryCode(String);

impl RecoveryCode {
    /// The token to deliver to the user.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RecoveryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RecoveryCode(<redacted>)")
    }
}

/// Version of the user's password a recovery code is bound to.
fn password_stamp(user: &User) -> i64 {
    user.updated_at.timestamp_millis()
}

fn invalid_recovery_code(message: impl Into<String>) -> DomainError {
    DomainError::BadRequest {
        field: "recoveryCode".to_string(),
        message: message.into(),
    }
}

/// Login, identity lookup and password recovery.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenService>,
    passwords: Arc<dyn PasswordService>,
    validation: ValidationService,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<dyn TokenService>,
        passwords: Arc<dyn PasswordService>,
        validation: ValidationService,
    ) -> Self {
        Self {
            users,
            tokens,
            passwords,
            validation,
        }
    }

    /// Check credentials and issue an access token.
    #[instrument(skip(self, data))]
    pub async fn login(&self, data: LoginDto) -> Result<AuthResponse, DomainError> {
        self.validation.validate(&data)?;

        let user = self
            .users
            .find_by_login_or_email(&data.login_or_email)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        let valid = self
            .passwords
            .verify(&data.password, &user.password_hash)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        if !valid {
            return Err(DomainError::Unauthorized);
        }

        let access_token = self
            .tokens
            .generate_token(user.id, &user.login)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(AuthResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.tokens.expiration_seconds().max(0) as u64,
        })
    }

    pub async fn me(&self, user_id: Uuid) -> Result<MeResponse, DomainError> {
        let user = find_user_or_error(self.users.as_ref(), user_id).await?;
        Ok(MeResponse {
            user_id: user.id.to_string(),
            login: user.login,
            email: user.email,
        })
    }

    /// Issue a recovery code for a registered email.
    ///
    /// Unknown emails yield `None`; delivering the code is up to the caller.
    #[instrument(skip(self, data))]
    pub async fn password_recovery(
        &self,
        data: PasswordRecoveryDto,
    ) -> Result<Option<RecoveryCode>, DomainError> {
        self.validation.validate(&data)?;

        let Some(user) = self.users.find_by_email(&data.email).await? else {
            tracing::debug!("Password recovery requested for unknown email");
            return Ok(None);
        };

        let code = self
            .tokens
            .generate_recovery_token(&user.email, password_stamp(&user))
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        tracing::info!(user_id = %user.id, "Recovery code issued");
        Ok(Some(RecoveryCode(code)))
    }

    /// Verify a recovery code and resolve the user it was issued to.
    ///
    /// Fails with `BadRequest` on the `email` field when the code's subject
    /// no longer matches any user, and on `recoveryCode` once the password
    /// has changed since the code was issued.
    pub async fn verify_recovery_code(
        &self,
        code: &str,
    ) -> Result<RecoveryTokenData, DomainError> {
        let claims = self
            .tokens
            .validate_recovery_token(code)
            .map_err(|e| match e {
                AuthError::TokenExpired | AuthError::InvalidToken(_) => {
                    invalid_recovery_code(e.to_string())
                }
                other => DomainError::Internal(other.to_string()),
            })?;

        let user = self
            .users
            .find_by_email(&claims.email)
            .await?
            .ok_or_else(|| DomainError::BadRequest {
                field: "email".to_string(),
                message: "No user is registered with this email".to_string(),
            })?;

        if claims.password_stamp != password_stamp(&user) {
            return Err(invalid_recovery_code("Recovery code has already been used"));
        }

        Ok(RecoveryTokenData { user_id: user.id })
    }

    /// Replace the password of the user a recovery code was issued to.
    #[instrument(skip(self, data))]
    pub async fn new_password(&self, data: NewPasswordDto) -> Result<(), DomainError> {
        self.validation.validate(&data)?;

        let RecoveryTokenData { user_id } = self.verify_recovery_code(&data.recovery_code).await?;
        let mut user = find_user_or_error(self.users.as_ref(), user_id).await?;

        let password_hash = self
            .passwords
            .hash(&data.new_password)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        user.set_password_hash(password_hash);

        self.users.save(user).await?;
        tracing::info!(user_id = %user_id, "Password changed via recovery code");
        Ok(())
    }
}
