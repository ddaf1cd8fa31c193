//! Blog entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blogger_core::domain::Blog;
use blogger_core::error::RepoError;

use crate::database::postgres_base::Persisted;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub website_url: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Persisted<Entity> for Blog {
    fn from_model(model: Model) -> Result<Self, RepoError> {
        Ok(Self {
            id: model.id,
            name: model.name,
            description: model.description,
            website_url: model.website_url,
            created_at: model.created_at.into(),
        })
    }

    fn into_active_model(self) -> Result<ActiveModel, RepoError> {
        Ok(ActiveModel {
            id: Set(self.id),
            name: Set(self.name),
            description: Set(self.description),
            website_url: Set(self.website_url),
            created_at: Set(self.created_at.into()),
        })
    }
}
