//! Document storage: an in-memory store and PostgreSQL via SeaORM.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

use std::sync::Arc;

use blogger_core::ports::{BlogRepository, CommentRepository, PostRepository, UserRepository};

pub use connections::DatabaseConfig;
pub use memory::{
    Document, InMemoryBlogRepository, InMemoryCommentRepository, InMemoryPostRepository,
    InMemoryRepository, InMemoryUserRepository,
};

#[cfg(feature = "postgres")]
pub use connections::DatabaseConnections;
#[cfg(feature = "postgres")]
pub use postgres_base::{Persisted, PostgresBaseRepository};
#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresBlogRepository, PostgresCommentRepository, PostgresPostRepository,
    PostgresUserRepository,
};

/// One repository per aggregate, all backed by the same store.
#[derive(Clone)]
pub struct Repositories {
    pub blogs: Arc<dyn BlogRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    /// Process-local storage. Data is lost on restart.
    pub fn in_memory() -> Self {
        Self {
            blogs: Arc::new(InMemoryBlogRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
            comments: Arc::new(InMemoryCommentRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
        }
    }

    #[cfg(feature = "postgres")]
    pub fn postgres(connections: &DatabaseConnections) -> Self {
        let db = &connections.main;
        Self {
            blogs: Arc::new(PostgresBlogRepository::new(Arc::clone(db))),
            posts: Arc::new(PostgresPostRepository::new(Arc::clone(db))),
            comments: Arc::new(PostgresCommentRepository::new(Arc::clone(db))),
            users: Arc::new(PostgresUserRepository::new(Arc::clone(db))),
        }
    }
}
