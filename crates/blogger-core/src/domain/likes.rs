//! Per-user reactions embedded in posts and comments.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use blogger_shared::dto::LikeStatus;

/// The current reaction of one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeRecord {
    pub user_id: Uuid,
    pub login: String,
    pub status: LikeStatus,
    pub added_at: DateTime<Utc>,
}

/// Like/dislike aggregate with at most one record per user.
///
/// The counters always equal the number of records holding `Like` and
/// `Dislike`; they are moved in the same call that replaces a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikesInfo {
    likes_count: u64,
    dislikes_count: u64,
    records: HashMap<Uuid, LikeRecord>,
}

impl LikesInfo {
    pub fn likes_count(&self) -> u64 {
        self.likes_count
    }

    pub fn dislikes_count(&self) -> u64 {
        self.dislikes_count
    }

    /// Replace the user's record with `status`, creating it if absent.
    pub fn set_status(
        &mut self,
        user_id: Uuid,
        login: &str,
        status: LikeStatus,
        at: DateTime<Utc>,
    ) {
        let previous = self
            .records
            .insert(
                user_id,
                LikeRecord {
                    user_id,
                    login: login.to_string(),
                    status,
                    added_at: at,
                },
            )
            .map(|record| record.status)
            .unwrap_or_default();

        self.adjust(previous, false);
        self.adjust(status, true);
    }

    fn adjust(&mut self, status: LikeStatus, increment: bool) {
        let counter = match status {
            LikeStatus::Like => &mut self.likes_count,
            LikeStatus::Dislike => &mut self.dislikes_count,
            LikeStatus::None => return,
        };
        *counter = if increment {
            counter.saturating_add(1)
        } else {
            counter.saturating_sub(1)
        };
    }

    /// Status held by `user_id`; anonymous viewers always see `None`.
    pub fn status_of(&self, user_id: Option<Uuid>) -> LikeStatus {
        user_id
            .and_then(|id| self.records.get(&id))
            .map(|record| record.status)
            .unwrap_or_default()
    }

    /// The `limit` most recent `Like` records, newest first.
    pub fn newest_likes(&self, limit: usize) -> Vec<&LikeRecord> {
        let mut likes: Vec<&LikeRecord> = self
            .records
            .values()
            .filter(|record| record.status == LikeStatus::Like)
            .collect();
        likes.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        likes.truncate(limit);
        likes
    }

    pub fn records(&self) -> impl Iterator<Item = &LikeRecord> {
        self.records.values()
    }
}
