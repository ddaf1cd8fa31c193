//! Write-side domain services.
//!
//! Every mutating operation runs the same chain: validate the input, resolve
//! the entities it depends on (failing fast with the matching `*NotFound`),
//! mutate or construct an entity, then persist it.

mod auth;
mod blogs;
mod comments;
mod posts;
mod users;

pub use auth::{AuthService, RecoveryCode, RecoveryTokenData};
pub use blogs::BlogsService;
pub use comments::CommentsService;
pub use posts::PostsService;
pub use users::UsersService;

use uuid::Uuid;

use crate::domain::{Blog, Comment, Post, User};
use crate::error::DomainError;
use crate::ports::{BlogRepository, CommentRepository, PostRepository, UserRepository};

pub(crate) async fn find_blog_or_error(
    blogs: &dyn BlogRepository,
    id: Uuid,
) -> Result<Blog, DomainError> {
    blogs
        .find_by_id(id)
        .await?
        .ok_or(DomainError::BlogNotFound(id))
}

pub(crate) async fn find_post_or_error(
    posts: &dyn PostRepository,
    id: Uuid,
) -> Result<Post, DomainError> {
    posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::PostNotFound(id))
}

pub(crate) async fn find_comment_or_error(
    comments: &dyn CommentRepository,
    id: Uuid,
) -> Result<Comment, DomainError> {
    comments
        .find_by_id(id)
        .await?
        .ok_or(DomainError::CommentNotFound(id))
}

pub(crate) async fn find_user_or_error(
    users: &dyn UserRepository,
    id: Uuid,
) -> Result<User, DomainError> {
    users
        .find_by_id(id)
        .await?
        .ok_or(DomainError::UserNotFound(id))
}
