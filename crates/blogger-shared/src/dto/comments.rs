use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::LikeStatus;

/// Request to create a comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommentDto {
    #[validate(length(min = 20, max = 300, message = "Content must be 20-300 characters"))]
    pub content: String,
}

pub type UpdateCommentDto = CreateCommentDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentatorInfoResponse {
    pub user_id: String,
    pub user_login: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikesInfoResponse {
    pub likes_count: u64,
    pub dislikes_count: u64,
    pub my_status: LikeStatus,
}

/// Public representation of a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub content: String,
    pub commentator_info: CommentatorInfoResponse,
    pub created_at: DateTime<Utc>,
    pub likes_info: LikesInfoResponse,
}
