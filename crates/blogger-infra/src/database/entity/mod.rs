//! SeaORM table definitions and their domain conversions.

pub mod blog;
pub mod comment;
pub mod post;
pub mod user;

use blogger_core::domain::LikesInfo;
use blogger_core::error::RepoError;
use sea_orm::entity::prelude::Json;

pub(crate) fn likes_from_json(value: Json) -> Result<LikesInfo, RepoError> {
    serde_json::from_value(value).map_err(|e| RepoError::Serialization(e.to_string()))
}

pub(crate) fn likes_to_json(likes: &LikesInfo) -> Result<Json, RepoError> {
    serde_json::to_value(likes).map_err(|e| RepoError::Serialization(e.to_string()))
}
