use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use blogger_shared::dto::{CreateLikeDto, CreatePostDto, CreatePostOfBlogDto, UpdatePostDto};

use crate::domain::{Post, PostData};
use crate::error::DomainError;
use crate::ports::{BlogRepository, PostRepository, UserRepository};
use crate::validation::ValidationService;

use super::{find_blog_or_error, find_post_or_error, find_user_or_error};

/// Post lifecycle: creation under a blog, updates, deletion and likes.
pub struct PostsService {
    blogs: Arc<dyn BlogRepository>,
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    validation: ValidationService,
}

impl PostsService {
    pub fn new(
        blogs: Arc<dyn BlogRepository>,
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        validation: ValidationService,
    ) -> Self {
        Self {
            blogs,
            users,
            posts,
            validation,
        }
    }

    /// Create a post under `data.blog_id`, snapshotting the blog's name.
    #[instrument(skip(self, data), fields(blog_id = %data.blog_id))]
    pub async fn create_post(&self, data: CreatePostDto) -> Result<Uuid, DomainError> {
        self.validation.validate(&data)?;

        let blog = find_blog_or_error(self.blogs.as_ref(), data.blog_id).await?;

        let post = Post::new(PostData {
            title: data.title,
            short_description: data.short_description,
            content: data.content,
            blog_id: blog.id,
            blog_name: blog.name,
        });

        let saved = self.posts.save(post).await?;
        tracing::info!(post_id = %saved.id, "Post created");
        Ok(saved.id)
    }

    /// Create a post under the blog addressed by the caller.
    #[instrument(skip(self, data))]
    pub async fn create_post_of_blog(
        &self,
        data: CreatePostOfBlogDto,
        blog_id: Uuid,
    ) -> Result<Uuid, DomainError> {
        self.validation.validate(&data)?;

        let blog = find_blog_or_error(self.blogs.as_ref(), blog_id).await?;

        let post = Post::new(PostData {
            title: data.title,
            short_description: data.short_description,
            content: data.content,
            blog_id: blog.id,
            blog_name: blog.name,
        });

        let saved = self.posts.save(post).await?;
        tracing::info!(post_id = %saved.id, "Post created");
        Ok(saved.id)
    }

    /// Update a post. The post may move to another blog; `blog_name` is
    /// re-read from whichever blog `data.blog_id` names.
    #[instrument(skip(self, data), fields(blog_id = %data.blog_id))]
    pub async fn update_post(&self, id: Uuid, data: UpdatePostDto) -> Result<(), DomainError> {
        self.validation.validate(&data)?;

        let blog = find_blog_or_error(self.blogs.as_ref(), data.blog_id).await?;
        let mut post = find_post_or_error(self.posts.as_ref(), id).await?;

        post.update_data(PostData {
            title: data.title,
            short_description: data.short_description,
            content: data.content,
            blog_id: blog.id,
            blog_name: blog.name,
        });

        self.posts.save(post).await?;
        Ok(())
    }

    /// Permanently delete a post.
    #[instrument(skip(self))]
    pub async fn remove_post(&self, id: Uuid) -> Result<(), DomainError> {
        let post = find_post_or_error(self.posts.as_ref(), id).await?;
        self.posts.delete(post.id).await?;
        tracing::info!(post_id = %id, "Post removed");
        Ok(())
    }

    /// Record `auth_user_id`'s reaction to a post, replacing any earlier one.
    #[instrument(skip(self, data), fields(status = ?data.like_status))]
    pub async fn set_like(
        &self,
        post_id: Uuid,
        auth_user_id: Uuid,
        data: CreateLikeDto,
    ) -> Result<(), DomainError> {
        self.validation.validate(&data)?;

        let user = find_user_or_error(self.users.as_ref(), auth_user_id).await?;
        let mut post = find_post_or_error(self.posts.as_ref(), post_id).await?;

        post.set_like(data.like_status, user.id, &user.login);
        self.posts.save(post).await?;
        Ok(())
    }
}
