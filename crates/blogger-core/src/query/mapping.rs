//! Entity to response DTO conversions.

use uuid::Uuid;

use blogger_shared::dto::{
    BlogResponse, CommentResponse, CommentatorInfoResponse, ExtendedLikesInfoResponse,
    LikeDetailsResponse, LikesInfoResponse, PostResponse, UserResponse,
};

use crate::domain::{Blog, Comment, Post, User};

/// How many recent likes a post response lists.
pub const NEWEST_LIKES_LIMIT: usize = 3;

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id.to_string(),
            name: blog.name,
            description: blog.description,
            website_url: blog.website_url,
            created_at: blog.created_at,
        }
    }
}

/// Never exposes the password hash.
impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            login: user.login,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Post as seen by `viewer` (`None` for anonymous requests).
pub fn post_response(post: Post, viewer: Option<Uuid>) -> PostResponse {
    let extended_likes_info = ExtendedLikesInfoResponse {
        likes_count: post.likes_info.likes_count(),
        dislikes_count: post.likes_info.dislikes_count(),
        my_status: post.likes_info.status_of(viewer),
        newest_likes: post
            .likes_info
            .newest_likes(NEWEST_LIKES_LIMIT)
            .into_iter()
            .map(|like| LikeDetailsResponse {
                added_at: like.added_at,
                user_id: like.user_id.to_string(),
                login: like.login.clone(),
            })
            .collect(),
    };

    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        short_description: post.short_description,
        content: post.content,
        blog_id: post.blog_id.to_string(),
        blog_name: post.blog_name,
        created_at: post.created_at,
        extended_likes_info,
    }
}

/// Comment as seen by `viewer` (`None` for anonymous requests).
pub fn comment_response(comment: Comment, viewer: Option<Uuid>) -> CommentResponse {
    CommentResponse {
        id: comment.id.to_string(),
        likes_info: LikesInfoResponse {
            likes_count: comment.likes_info.likes_count(),
            dislikes_count: comment.likes_info.dislikes_count(),
            my_status: comment.likes_info.status_of(viewer),
        },
        content: comment.content,
        commentator_info: CommentatorInfoResponse {
            user_id: comment.commentator_info.user_id.to_string(),
            user_login: comment.commentator_info.user_login,
        },
        created_at: comment.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LikeStatus, PostData};

    #[test]
    fn test_post_response_reflects_viewer() {
        let mut post = Post::new(PostData {
            title: "t".to_string(),
            short_description: "s".to_string(),
            content: "c".to_string(),
            blog_id: Uuid::new_v4(),
            blog_name: "Blog".to_string(),
        });
        let fan = Uuid::new_v4();
        post.set_like(LikeStatus::Like, fan, "fan");
        post.set_like(LikeStatus::Dislike, Uuid::new_v4(), "critic");

        let seen_by_fan = post_response(post.clone(), Some(fan));
        assert_eq!(seen_by_fan.id, post.id.to_string());
        assert_eq!(seen_by_fan.extended_likes_info.my_status, LikeStatus::Like);
        assert_eq!(seen_by_fan.extended_likes_info.likes_count, 1);
        assert_eq!(seen_by_fan.extended_likes_info.dislikes_count, 1);
        assert_eq!(seen_by_fan.extended_likes_info.newest_likes.len(), 1);
        assert_eq!(seen_by_fan.extended_likes_info.newest_likes[0].login, "fan");

        let anonymous = post_response(post, None);
        assert_eq!(anonymous.extended_likes_info.my_status, LikeStatus::None);
    }

    #[test]
    fn test_user_response_hides_password() {
        let user = User::new(
            "alice".to_string(),
            "a@example.com".to_string(),
            "secret-hash".to_string(),
        );
        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(json.contains("createdAt"));
    }
}
