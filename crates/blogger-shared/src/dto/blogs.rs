use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;

/// Request to create a blog.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogDto {
    #[validate(
        custom(function = "not_blank"),
        length(max = 15, message = "Name must be at most 15 characters")
    )]
    pub name: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: String,

    #[validate(
        url(message = "Website URL must be a valid URL"),
        length(max = 100, message = "Website URL must be at most 100 characters")
    )]
    pub website_url: String,
}

/// Request to update a blog. Same rules as creation.
pub type UpdateBlogDto = CreateBlogDto;

/// Public representation of a blog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub website_url: String,
    pub created_at: DateTime<Utc>,
}
