//! JWT access tokens and password-recovery codes.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use blogger_core::ports::{AuthError, RecoveryClaims, TokenClaims, TokenService};

const DEFAULT_SECRET: &str = "change-me-in-production";
const DEFAULT_RECOVERY_SECRET: &str = "change-me-recovery-secret";
const RECOVERY_AUDIENCE: &str = "password-recovery";

/// JWT token service configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
    pub issuer: String,
    pub recovery_secret: String,
    pub recovery_expiration_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            expiration_hours: 24,
            issuer: "blogger-api".to_string(),
            recovery_secret: DEFAULT_RECOVERY_SECRET.to_string(),
            recovery_expiration_minutes: 60,
        }
    }
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let secret = std::env::var("JWT_SECRET").unwrap_or(defaults.secret);

        // Warn if using default secret in production
        if secret == DEFAULT_SECRET {
            let is_production = std::env::var("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false);

            if is_production {
                tracing::error!(
                    "SECURITY: Using default JWT secret in production! Set JWT_SECRET environment variable."
                );
            } else {
                tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
            }
        }

        Self {
            secret,
            expiration_hours: env_number("JWT_EXPIRATION_HOURS", defaults.expiration_hours),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
            recovery_secret: std::env::var("RECOVERY_TOKEN_SECRET")
                .unwrap_or(defaults.recovery_secret),
            recovery_expiration_minutes: env_number(
                "RECOVERY_TOKEN_EXPIRATION_MINUTES",
                defaults.recovery_expiration_minutes,
            ),
        }
    }
}

fn env_number(key: &str, default: i64) -> i64 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims {
    sub: String, // user_id
    login: String,
    exp: i64,
    iat: i64,
    iss: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct RecoveryCodeClaims {
    sub: String, // email
    pwd: i64,
    aud: String,
    exp: i64,
    iat: i64,
    iss: String,
}

/// Signs access tokens and recovery codes with separate keys.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    recovery_encoding_key: EncodingKey,
    recovery_decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            recovery_encoding_key: EncodingKey::from_secret(config.recovery_secret.as_bytes()),
            recovery_decoding_key: DecodingKey::from_secret(config.recovery_secret.as_bytes()),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(JwtConfig::from_env())
    }

    fn issuer_validation(&self) -> Validation {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);
        validation
    }
}

fn decode_error(e: jsonwebtoken::errors::Error) -> AuthError {
    match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken(e.to_string()),
    }
}

impl TokenService for JwtTokenService {
    fn generate_token(&self, user_id: Uuid, login: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + TimeDelta::hours(self.config.expiration_hours);

        let claims = AccessClaims {
            sub: user_id.to_string(),
            login: login.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let token_data =
            decode::<AccessClaims>(token, &self.decoding_key, &self.issuer_validation())
                .map_err(decode_error)?;

        let user_id = Uuid::parse_str(&token_data.claims.sub)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(TokenClaims {
            user_id,
            login: token_data.claims.login,
            exp: token_data.claims.exp,
        })
    }

    fn expiration_seconds(&self) -> i64 {
        self.config.expiration_hours * 3600
    }

    fn generate_recovery_token(
        &self,
        email: &str,
        password_stamp: i64,
    ) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + TimeDelta::minutes(self.config.recovery_expiration_minutes);

        let claims = RecoveryCodeClaims {
            sub: email.to_string(),
            pwd: password_stamp,
            aud: RECOVERY_AUDIENCE.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.recovery_encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn validate_recovery_token(&self, token: &str) -> Result<RecoveryClaims, AuthError> {
        let mut validation = self.issuer_validation();
        validation.set_audience(&[RECOVERY_AUDIENCE]);

        let token_data =
            decode::<RecoveryCodeClaims>(token, &self.recovery_decoding_key, &validation)
                .map_err(decode_error)?;

        Ok(RecoveryClaims {
            email: token_data.claims.sub,
            password_stamp: token_data.claims.pwd,
            exp: token_data.claims.exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key".to_string(),
            expiration_hours: 1,
            issuer: "test-issuer".to_string(),
            recovery_secret: "test-recovery-key".to_string(),
            recovery_expiration_minutes: 5,
        }
    }

    #[test]
    fn test_validate_token_success() {
        let service = JwtTokenService::new(test_config());
        let user_id = Uuid::new_v4();

        let token = service.generate_token(user_id, "alice").unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.login, "alice");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_validate_invalid_token() {
        let service = JwtTokenService::new(test_config());

        let result = service.validate_token("invalid-token");
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_validate_wrong_issuer_token() {
        let issuer1 = JwtTokenService::new(JwtConfig {
            issuer: "issuer1".to_string(),
            ..test_config()
        });
        let issuer2 = JwtTokenService::new(JwtConfig {
            issuer: "issuer2".to_string(),
            ..test_config()
        });

        let token = issuer1.generate_token(Uuid::new_v4(), "alice").unwrap();
        assert!(issuer2.validate_token(&token).is_err());
    }

    #[test]
    fn test_expired_token() {
        let service = JwtTokenService::new(test_config());
        let past = Utc::now() - TimeDelta::hours(2);
        let claims = AccessClaims {
            sub: Uuid::new_v4().to_string(),
            login: "alice".to_string(),
            exp: past.timestamp(),
            iat: past.timestamp(),
            iss: "test-issuer".to_string(),
        };
        let token = encode(&Header::default(), &claims, &service.encoding_key).unwrap();

        assert!(matches!(
            service.validate_token(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_recovery_token_round_trip() {
        let service = JwtTokenService::new(test_config());

        let code = service
            .generate_recovery_token("alice@example.com", 1_700_000_000_123)
            .unwrap();
        let claims = service.validate_recovery_token(&code).unwrap();

        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.password_stamp, 1_700_000_000_123);
    }

    #[test]
    fn test_tokens_are_not_interchangeable() {
        let service = JwtTokenService::new(test_config());

        let access = service.generate_token(Uuid::new_v4(), "alice").unwrap();
        assert!(service.validate_recovery_token(&access).is_err());

        let code = service.generate_recovery_token("alice@example.com", 0).unwrap();
        assert!(service.validate_token(&code).is_err());
    }

    #[test]
    fn test_expiration_seconds() {
        let service = JwtTokenService::new(JwtConfig {
            expiration_hours: 24,
            ..test_config()
        });

        assert_eq!(service.expiration_seconds(), 86400);
    }
}
