use std::sync::Arc;

use uuid::Uuid;

use blogger_shared::Paginated;
use blogger_shared::dto::{BlogResponse, BlogsQuery};

use crate::error::DomainError;
use crate::pagination::paginate;
use crate::ports::{BlogFilter, BlogRepository};

use super::search_term;

pub struct QueryBlogsRepository {
    blogs: Arc<dyn BlogRepository>,
}

impl QueryBlogsRepository {
    pub fn new(blogs: Arc<dyn BlogRepository>) -> Self {
        Self { blogs }
    }

    /// Blogs whose name contains `searchNameTerm` (case-insensitive), paged.
    pub async fn find_all_blogs(
        &self,
        query: &BlogsQuery,
    ) -> Result<Paginated<BlogResponse>, DomainError> {
        let filter = BlogFilter {
            name_term: search_term(query.search_name_term.as_deref()),
        };

        let total_count = self.blogs.count(&filter).await?;
        let pagination = paginate(&query.pagination(), total_count);
        let blogs = self
            .blogs
            .find_many(&filter, &pagination.page_request())
            .await?;

        Ok(pagination.into_page(total_count, blogs.into_iter().map(Into::into).collect()))
    }

    pub async fn find_one_blog(&self, id: Uuid) -> Result<BlogResponse, DomainError> {
        self.blogs
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or(DomainError::BlogNotFound(id))
    }
}
