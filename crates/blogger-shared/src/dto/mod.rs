//! Data Transfer Objects - request/response types for the API.

mod auth;
mod blogs;
mod comments;
mod likes;
mod posts;
mod query;
mod users;

pub use auth::{AuthResponse, LoginDto, MeResponse, NewPasswordDto, PasswordRecoveryDto};
pub use blogs::{BlogResponse, CreateBlogDto, UpdateBlogDto};
pub use comments::{
    CommentResponse, CommentatorInfoResponse, CreateCommentDto, LikesInfoResponse,
    UpdateCommentDto,
};
pub use likes::{CreateLikeDto, LikeStatus};
pub use posts::{
    CreatePostDto, CreatePostOfBlogDto, ExtendedLikesInfoResponse, LikeDetailsResponse,
    PostResponse, UpdatePostDto,
};
pub use query::{
    BlogsQuery, CommentsQuery, PaginationParams, PostsQuery, SortDirection, UsersQuery,
};
pub use users::{CreateUserDto, UserResponse};

use validator::ValidationError;

/// Rejects strings that are empty once surrounding whitespace is removed.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}
