//! Post entity for SeaORM. Likes live in a JSONB document column.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blogger_core::domain::Post;
use blogger_core::error::RepoError;

use super::{likes_from_json, likes_to_json};
use crate::database::postgres_base::Persisted;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub short_description: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub blog_id: Uuid,
    pub blog_name: String,
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_type = "JsonBinary")]
    pub likes_info: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Persisted<Entity> for Post {
    fn from_model(model: Model) -> Result<Self, RepoError> {
        Ok(Self {
            id: model.id,
            title: model.title,
            short_description: model.short_description,
            content: model.content,
            blog_id: model.blog_id,
            blog_name: model.blog_name,
            created_at: model.created_at.into(),
            likes_info: likes_from_json(model.likes_info)?,
        })
    }

    fn into_active_model(self) -> Result<ActiveModel, RepoError> {
        Ok(ActiveModel {
            likes_info: Set(likes_to_json(&self.likes_info)?),
            id: Set(self.id),
            title: Set(self.title),
            short_description: Set(self.short_description),
            content: Set(self.content),
            blog_id: Set(self.blog_id),
            blog_name: Set(self.blog_name),
            created_at: Set(self.created_at.into()),
        })
    }
}
