use std::sync::Arc;

use uuid::Uuid;

use blogger_shared::Paginated;
use blogger_shared::dto::{PostResponse, PostsQuery};

use crate::error::DomainError;
use crate::pagination::paginate;
use crate::ports::{BlogRepository, PostFilter, PostRepository};

use super::post_response;

pub struct QueryPostsRepository {
    posts: Arc<dyn PostRepository>,
    blogs: Arc<dyn BlogRepository>,
}

impl QueryPostsRepository {
    pub fn new(posts: Arc<dyn PostRepository>, blogs: Arc<dyn BlogRepository>) -> Self {
        Self { posts, blogs }
    }

    pub async fn find_all_posts(
        &self,
        query: &PostsQuery,
        viewer: Option<Uuid>,
    ) -> Result<Paginated<PostResponse>, DomainError> {
        self.find_page(PostFilter::default(), query, viewer).await
    }

    /// Posts of one blog. Fails with `BlogNotFound` when the blog is missing.
    pub async fn find_posts_of_blog(
        &self,
        blog_id: Uuid,
        query: &PostsQuery,
        viewer: Option<Uuid>,
    ) -> Result<Paginated<PostResponse>, DomainError> {
        if self.blogs.find_by_id(blog_id).await?.is_none() {
            return Err(DomainError::BlogNotFound(blog_id));
        }

        let filter = PostFilter {
            blog_id: Some(blog_id),
        };
        self.find_page(filter, query, viewer).await
    }

    pub async fn find_one_post(
        &self,
        id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<PostResponse, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .map(|post| post_response(post, viewer))
            .ok_or(DomainError::PostNotFound(id))
    }

    async fn find_page(
        &self,
        filter: PostFilter,
        query: &PostsQuery,
        viewer: Option<Uuid>,
    ) -> Result<Paginated<PostResponse>, DomainError> {
        let total_count = self.posts.count(&filter).await?;
        let pagination = paginate(&query.pagination(), total_count);
        let posts = self
            .posts
            .find_many(&filter, &pagination.page_request())
            .await?;

        let items = posts
            .into_iter()
            .map(|post| post_response(post, viewer))
            .collect();
        Ok(pagination.into_page(total_count, items))
    }
}
