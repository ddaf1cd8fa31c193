//! Comment entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blogger_core::domain::{Comment, CommentatorInfo};
use blogger_core::error::RepoError;

use super::{likes_from_json, likes_to_json};
use crate::database::postgres_base::Persisted;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub post_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub commentator_id: Uuid,
    pub commentator_login: String,
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_type = "JsonBinary")]
    pub likes_info: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Persisted<Entity> for Comment {
    fn from_model(model: Model) -> Result<Self, RepoError> {
        Ok(Self {
            id: model.id,
            post_id: model.post_id,
            content: model.content,
            commentator_info: CommentatorInfo {
                user_id: model.commentator_id,
                user_login: model.commentator_login,
            },
            created_at: model.created_at.into(),
            likes_info: likes_from_json(model.likes_info)?,
        })
    }

    fn into_active_model(self) -> Result<ActiveModel, RepoError> {
        Ok(ActiveModel {
            likes_info: Set(likes_to_json(&self.likes_info)?),
            id: Set(self.id),
            post_id: Set(self.post_id),
            content: Set(self.content),
            commentator_id: Set(self.commentator_info.user_id),
            commentator_login: Set(self.commentator_info.user_login),
            created_at: Set(self.created_at.into()),
        })
    }
}
