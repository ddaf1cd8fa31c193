use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Blog, Comment, Post, User};
use crate::error::RepoError;
use crate::pagination::PageRequest;

use super::query::{BlogFilter, CommentFilter, PostFilter, UserFilter};

/// Generic repository trait defining standard document operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity, replacing any stored document with the same ID.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Permanently delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, Uuid> {
    async fn count(&self, filter: &BlogFilter) -> Result<u64, RepoError>;

    async fn find_many(
        &self,
        filter: &BlogFilter,
        page: &PageRequest,
    ) -> Result<Vec<Blog>, RepoError>;
}

#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    async fn count(&self, filter: &PostFilter) -> Result<u64, RepoError>;

    async fn find_many(
        &self,
        filter: &PostFilter,
        page: &PageRequest,
    ) -> Result<Vec<Post>, RepoError>;

    /// Refresh the blog name snapshot on every post of `blog_id`.
    /// Returns the number of posts touched.
    async fn rename_blog(&self, blog_id: Uuid, blog_name: &str) -> Result<u64, RepoError>;
}

#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    async fn count(&self, filter: &CommentFilter) -> Result<u64, RepoError>;

    async fn find_many(
        &self,
        filter: &CommentFilter,
        page: &PageRequest,
    ) -> Result<Vec<Comment>, RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepoError>;

    async fn count(&self, filter: &UserFilter) -> Result<u64, RepoError>;

    async fn find_many(
        &self,
        filter: &UserFilter,
        page: &PageRequest,
    ) -> Result<Vec<User>, RepoError>;

    async fn find_by_login_or_email(
        &self,
        login_or_email: &str,
    ) -> Result<Option<User>, RepoError> {
        match self.find_by_login(login_or_email).await? {
            Some(user) => Ok(Some(user)),
            None => self.find_by_email(login_or_email).await,
        }
    }
}
