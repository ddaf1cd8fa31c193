use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::likes::{LikeStatus, LikesInfo};

/// Post entity - belongs to a blog and carries a copy of that blog's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub short_description: String,
    pub content: String,
    pub blog_id: Uuid,
    /// Snapshot of `Blog::name`, refreshed on every write that touches it.
    pub blog_name: String,
    pub created_at: DateTime<Utc>,
    pub likes_info: LikesInfo,
}

/// Fields written when a post is created or updated.
#[derive(Debug, Clone)]
pub struct PostData {
    pub title: String,
    pub short_description: String,
    pub content: String,
    pub blog_id: Uuid,
    pub blog_name: String,
}

impl Post {
    /// Create a new post.
    pub fn new(data: PostData) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: data.title,
            short_description: data.short_description,
            content: data.content,
            blog_id: data.blog_id,
            blog_name: data.blog_name,
            created_at: Utc::now(),
            likes_info: LikesInfo::default(),
        }
    }

    pub fn update_data(&mut self, data: PostData) {
        self.title = data.title;
        self.short_description = data.short_description;
        self.content = data.content;
        self.blog_id = data.blog_id;
        self.blog_name = data.blog_name;
    }

    pub fn set_like(&mut self, status: LikeStatus, user_id: Uuid, login: &str) {
        self.likes_info.set_status(user_id, login, status, Utc::now());
    }
}
