use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use blogger_shared::dto::{CreateCommentDto, CreateLikeDto, UpdateCommentDto};

use crate::domain::{Comment, CommentatorInfo};
use crate::error::DomainError;
use crate::ports::{CommentRepository, PostRepository, UserRepository};
use crate::validation::ValidationService;

use super::{find_comment_or_error, find_post_or_error, find_user_or_error};

/// Comment lifecycle. Only the commentator may edit or delete a comment.
pub struct CommentsService {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
    validation: ValidationService,
}

impl CommentsService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        posts: Arc<dyn PostRepository>,
        users: Arc<dyn UserRepository>,
        validation: ValidationService,
    ) -> Self {
        Self {
            comments,
            posts,
            users,
            validation,
        }
    }

    #[instrument(skip(self, data))]
    pub async fn create_comment(
        &self,
        post_id: Uuid,
        auth_user_id: Uuid,
        data: CreateCommentDto,
    ) -> Result<Uuid, DomainError> {
        self.validation.validate(&data)?;

        let user = find_user_or_error(self.users.as_ref(), auth_user_id).await?;
        let post = find_post_or_error(self.posts.as_ref(), post_id).await?;

        let comment = Comment::new(
            post.id,
            data.content,
            CommentatorInfo {
                user_id: user.id,
                user_login: user.login,
            },
        );

        let saved = self.comments.save(comment).await?;
        tracing::info!(comment_id = %saved.id, "Comment created");
        Ok(saved.id)
    }

    #[instrument(skip(self, data))]
    pub async fn update_comment(
        &self,
        id: Uuid,
        auth_user_id: Uuid,
        data: UpdateCommentDto,
    ) -> Result<(), DomainError> {
        self.validation.validate(&data)?;

        let mut comment = find_comment_or_error(self.comments.as_ref(), id).await?;
        if !comment.is_owned_by(auth_user_id) {
            return Err(DomainError::Forbidden);
        }

        comment.update_content(data.content);
        self.comments.save(comment).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn remove_comment(&self, id: Uuid, auth_user_id: Uuid) -> Result<(), DomainError> {
        let comment = find_comment_or_error(self.comments.as_ref(), id).await?;
        if !comment.is_owned_by(auth_user_id) {
            return Err(DomainError::Forbidden);
        }

        self.comments.delete(comment.id).await?;
        tracing::info!(comment_id = %id, "Comment removed");
        Ok(())
    }

    #[instrument(skip(self, data), fields(status = ?data.like_status))]
    pub async fn set_like(
        &self,
        comment_id: Uuid,
        auth_user_id: Uuid,
        data: CreateLikeDto,
    ) -> Result<(), DomainError> {
        self.validation.validate(&data)?;

        let user = find_user_or_error(self.users.as_ref(), auth_user_id).await?;
        let mut comment = find_comment_or_error(self.comments.as_ref(), comment_id).await?;

        comment.set_like(data.like_status, user.id, &user.login);
        self.comments.save(comment).await?;
        Ok(())
    }
}
