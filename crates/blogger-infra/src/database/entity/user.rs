//! User entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blogger_core::domain::User;
use blogger_core::error::RepoError;

use crate::database::postgres_base::Persisted;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub login: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Persisted<Entity> for User {
    fn from_model(model: Model) -> Result<Self, RepoError> {
        Ok(Self {
            id: model.id,
            login: model.login,
            email: model.email,
            password_hash: model.password_hash,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }

    fn into_active_model(self) -> Result<ActiveModel, RepoError> {
        Ok(ActiveModel {
            id: Set(self.id),
            login: Set(self.login),
            email: Set(self.email),
            password_hash: Set(self.password_hash),
            created_at: Set(self.created_at.into()),
            updated_at: Set(self.updated_at.into()),
        })
    }
}
