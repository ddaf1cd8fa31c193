//! Domain entities - the core business objects.

mod blog;
mod comment;
mod likes;
mod post;
mod user;

pub use blog::{Blog, BlogData};
pub use comment::{Comment, CommentatorInfo};
pub use likes::{LikeRecord, LikeStatus, LikesInfo};
pub use post::{Post, PostData};
pub use user::User;
