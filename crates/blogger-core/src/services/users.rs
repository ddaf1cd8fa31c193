use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use blogger_shared::dto::CreateUserDto;

use crate::domain::User;
use crate::error::DomainError;
use crate::ports::{PasswordService, UserRepository};
use crate::validation::ValidationService;

use super::find_user_or_error;

pub struct UsersService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    validation: ValidationService,
}

impl UsersService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        validation: ValidationService,
    ) -> Self {
        Self {
            users,
            passwords,
            validation,
        }
    }

    /// Create a user. Login and email must both be unused.
    #[instrument(skip(self, data), fields(login = %data.login))]
    pub async fn create_user(&self, data: CreateUserDto) -> Result<Uuid, DomainError> {
        self.validation.validate(&data)?;

        if self.users.find_by_login(&data.login).await?.is_some() {
            return Err(DomainError::invalid_field("login", "Login is already taken"));
        }
        if self.users.find_by_email(&data.email).await?.is_some() {
            return Err(DomainError::invalid_field("email", "Email is already registered"));
        }

        let password_hash = self
            .passwords
            .hash(&data.password)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let saved = self
            .users
            .save(User::new(data.login, data.email, password_hash))
            .await?;
        tracing::info!(user_id = %saved.id, "User created");
        Ok(saved.id)
    }

    #[instrument(skip(self))]
    pub async fn remove_user(&self, id: Uuid) -> Result<(), DomainError> {
        let user = find_user_or_error(self.users.as_ref(), id).await?;
        self.users.delete(user.id).await?;
        tracing::info!(user_id = %id, "User removed");
        Ok(())
    }
}
