use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use blogger_shared::dto::{CreateBlogDto, UpdateBlogDto};

use crate::domain::{Blog, BlogData};
use crate::error::DomainError;
use crate::ports::{BlogRepository, PostRepository};
use crate::validation::ValidationService;

use super::find_blog_or_error;

pub struct BlogsService {
    blogs: Arc<dyn BlogRepository>,
    posts: Arc<dyn PostRepository>,
    validation: ValidationService,
}

impl BlogsService {
    pub fn new(
        blogs: Arc<dyn BlogRepository>,
        posts: Arc<dyn PostRepository>,
        validation: ValidationService,
    ) -> Self {
        Self {
            blogs,
            posts,
            validation,
        }
    }

    #[instrument(skip(self, data))]
    pub async fn create_blog(&self, data: CreateBlogDto) -> Result<Uuid, DomainError> {
        self.validation.validate(&data)?;

        let blog = Blog::new(BlogData {
            name: data.name,
            description: data.description,
            website_url: data.website_url,
        });

        let saved = self.blogs.save(blog).await?;
        tracing::info!(blog_id = %saved.id, "Blog created");
        Ok(saved.id)
    }

    /// Update a blog. A rename is copied onto every post of the blog.
    #[instrument(skip(self, data))]
    pub async fn update_blog(&self, id: Uuid, data: UpdateBlogDto) -> Result<(), DomainError> {
        self.validation.validate(&data)?;

        let mut blog = find_blog_or_error(self.blogs.as_ref(), id).await?;
        let renamed = blog.update_data(BlogData {
            name: data.name,
            description: data.description,
            website_url: data.website_url,
        });

        let saved = self.blogs.save(blog).await?;

        if renamed {
            let touched = self.posts.rename_blog(saved.id, &saved.name).await?;
            tracing::debug!(blog_id = %saved.id, touched, "Blog name copied to posts");
        }
        Ok(())
    }

    /// Permanently delete a blog. Its posts are left in place.
    #[instrument(skip(self))]
    pub async fn remove_blog(&self, id: Uuid) -> Result<(), DomainError> {
        let blog = find_blog_or_error(self.blogs.as_ref(), id).await?;
        self.blogs.delete(blog.id).await?;
        tracing::info!(blog_id = %id, "Blog removed");
        Ok(())
    }
}
