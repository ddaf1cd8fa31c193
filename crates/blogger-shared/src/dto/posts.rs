use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{LikeStatus, not_blank};

/// Request to create a post under the blog named in the body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostDto {
    #[validate(
        custom(function = "not_blank"),
        length(max = 30, message = "Title must be at most 30 characters")
    )]
    pub title: String,

    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Short description must be at most 100 characters")
    )]
    pub short_description: String,

    #[validate(
        custom(function = "not_blank"),
        length(max = 1000, message = "Content must be at most 1000 characters")
    )]
    pub content: String,

    pub blog_id: Uuid,
}

/// Request to create a post under the blog addressed by the URL.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostOfBlogDto {
    #[validate(
        custom(function = "not_blank"),
        length(max = 30, message = "Title must be at most 30 characters")
    )]
    pub title: String,

    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Short description must be at most 100 characters")
    )]
    pub short_description: String,

    #[validate(
        custom(function = "not_blank"),
        length(max = 1000, message = "Content must be at most 1000 characters")
    )]
    pub content: String,
}

/// Request to update a post. `blog_id` may point at a different blog.
pub type UpdatePostDto = CreatePostDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeDetailsResponse {
    pub added_at: DateTime<Utc>,
    pub user_id: String,
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedLikesInfoResponse {
    pub likes_count: u64,
    pub dislikes_count: u64,
    pub my_status: LikeStatus,
    pub newest_likes: Vec<LikeDetailsResponse>,
}

/// Public representation of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub content: String,
    pub blog_id: String,
    pub blog_name: String,
    pub created_at: DateTime<Utc>,
    pub extended_likes_info: ExtendedLikesInfoResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_reports_every_bad_field() {
        let dto = CreatePostDto {
            title: "".to_string(),
            short_description: "x".repeat(101),
            content: "body".to_string(),
            blog_id: Uuid::new_v4(),
        };

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 2);
        assert!(fields.contains_key("title"));
        assert!(!fields.contains_key("content"));
    }

    #[test]
    fn test_post_of_blog_has_no_blog_id() {
        let dto: CreatePostOfBlogDto = serde_json::from_str(
            r#"{"title":"t","shortDescription":"s","content":"c","blogId":"ignored"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_ok());
    }
}
