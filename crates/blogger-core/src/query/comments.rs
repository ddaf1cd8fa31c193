use std::sync::Arc;

use uuid::Uuid;

use blogger_shared::Paginated;
use blogger_shared::dto::{CommentResponse, CommentsQuery};

use crate::error::DomainError;
use crate::pagination::paginate;
use crate::ports::{CommentFilter, CommentRepository, PostRepository};

use super::comment_response;

pub struct QueryCommentsRepository {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
}

impl QueryCommentsRepository {
    pub fn new(comments: Arc<dyn CommentRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { comments, posts }
    }

    /// Comments of one post. Fails with `PostNotFound` when the post is missing.
    pub async fn find_comments_of_post(
        &self,
        post_id: Uuid,
        query: &CommentsQuery,
        viewer: Option<Uuid>,
    ) -> Result<Paginated<CommentResponse>, DomainError> {
        if self.posts.find_by_id(post_id).await?.is_none() {
            return Err(DomainError::PostNotFound(post_id));
        }

        let filter = CommentFilter {
            post_id: Some(post_id),
        };
        let total_count = self.comments.count(&filter).await?;
        let pagination = paginate(&query.pagination(), total_count);
        let comments = self
            .comments
            .find_many(&filter, &pagination.page_request())
            .await?;

        let items = comments
            .into_iter()
            .map(|comment| comment_response(comment, viewer))
            .collect();
        Ok(pagination.into_page(total_count, items))
    }

    pub async fn find_one_comment(
        &self,
        id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<CommentResponse, DomainError> {
        self.comments
            .find_by_id(id)
            .await?
            .map(|comment| comment_response(comment, viewer))
            .ok_or(DomainError::CommentNotFound(id))
    }
}
