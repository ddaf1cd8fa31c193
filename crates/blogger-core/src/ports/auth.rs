//! Authentication and password-recovery ports.

use uuid::Uuid;

/// Claims carried by an access token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub login: String,
    pub exp: i64,
}

/// Claims carried by a password-recovery code. The subject is an email.
///
/// `password_stamp` is the user's password version when the code was issued;
/// a code is only honoured while it still matches.
#[derive(Debug, Clone)]
pub struct RecoveryClaims {
    pub email: String,
    pub password_stamp: i64,
    pub exp: i64,
}

/// Token service trait for access tokens and recovery codes.
pub trait TokenService: Send + Sync {
    /// Generate an access token for a user.
    fn generate_token(&self, user_id: Uuid, login: &str) -> Result<String, AuthError>;

    /// Validate and decode an access token.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Lifetime of access tokens, in seconds.
    fn expiration_seconds(&self) -> i64;

    /// Generate a recovery code addressed to `email`, bound to `password_stamp`.
    fn generate_recovery_token(
        &self,
        email: &str,
        password_stamp: i64,
    ) -> Result<String, AuthError>;

    /// Verify a recovery code and extract its subject.
    fn validate_recovery_token(&self, token: &str) -> Result<RecoveryClaims, AuthError>;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
