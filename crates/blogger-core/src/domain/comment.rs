use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::likes::{LikeStatus, LikesInfo};

/// Who wrote a comment, denormalised at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentatorInfo {
    pub user_id: Uuid,
    pub user_login: String,
}

/// Comment entity - owned by its commentator, attached to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub content: String,
    pub commentator_info: CommentatorInfo,
    pub created_at: DateTime<Utc>,
    pub likes_info: LikesInfo,
}

impl Comment {
    pub fn new(post_id: Uuid, content: String, commentator_info: CommentatorInfo) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            content,
            commentator_info,
            created_at: Utc::now(),
            likes_info: LikesInfo::default(),
        }
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.commentator_info.user_id == user_id
    }

    pub fn update_content(&mut self, content: String) {
        self.content = content;
    }

    pub fn set_like(&mut self, status: LikeStatus, user_id: Uuid, login: &str) {
        self.likes_info.set_status(user_id, login, status, Utc::now());
    }
}
