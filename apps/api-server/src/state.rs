//! Application state - shared across all handlers.

use std::sync::Arc;

use blogger_core::ValidationService;
use blogger_core::ports::{PasswordService, TokenService};
use blogger_core::query::{
    QueryBlogsRepository, QueryCommentsRepository, QueryPostsRepository, QueryUsersRepository,
};
use blogger_core::services::{AuthService, BlogsService, CommentsService, PostsService, UsersService};
use blogger_infra::{DatabaseConfig, Repositories};

#[cfg(feature = "postgres")]
use blogger_infra::DatabaseConnections;

/// Which store the repositories are backed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    Postgres,
    Memory,
}

impl Storage {
    pub fn as_str(self) -> &'static str {
        match self {
            Storage::Postgres => "postgres",
            Storage::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<BlogsService>,
    pub posts: Arc<PostsService>,
    pub comments: Arc<CommentsService>,
    pub users: Arc<UsersService>,
    pub auth: Arc<AuthService>,
    pub blogs_query: Arc<QueryBlogsRepository>,
    pub posts_query: Arc<QueryPostsRepository>,
    pub comments_query: Arc<QueryCommentsRepository>,
    pub users_query: Arc<QueryUsersRepository>,
    pub storage: Storage,
}

impl AppState {
    /// Build the application state, preferring PostgreSQL when configured.
    pub async fn new(
        db_config: Option<&DatabaseConfig>,
        tokens: Arc<dyn TokenService>,
        passwords: Arc<dyn PasswordService>,
    ) -> Self {
        let (repos, storage) = Self::repositories(db_config).await;
        tracing::info!(storage = storage.as_str(), "Application state initialized");
        Self::from_repositories(repos, storage, tokens, passwords)
    }

    #[cfg(feature = "postgres")]
    async fn repositories(db_config: Option<&DatabaseConfig>) -> (Repositories, Storage) {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return (Repositories::in_memory(), Storage::Memory);
        };

        match DatabaseConnections::init(config).await {
            Ok(connections) => (Repositories::postgres(&connections), Storage::Postgres),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                (Repositories::in_memory(), Storage::Memory)
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn repositories(_db_config: Option<&DatabaseConfig>) -> (Repositories, Storage) {
        tracing::info!("Running without postgres feature - using in-memory repositories");
        (Repositories::in_memory(), Storage::Memory)
    }

    /// Wire every service and query repository onto one set of repositories.
    pub fn from_repositories(
        repos: Repositories,
        storage: Storage,
        tokens: Arc<dyn TokenService>,
        passwords: Arc<dyn PasswordService>,
    ) -> Self {
        let validation = ValidationService::new();

        Self {
            blogs: Arc::new(BlogsService::new(
                repos.blogs.clone(),
                repos.posts.clone(),
                validation,
            )),
            posts: Arc::new(PostsService::new(
                repos.blogs.clone(),
                repos.users.clone(),
                repos.posts.clone(),
                validation,
            )),
            comments: Arc::new(CommentsService::new(
                repos.comments.clone(),
                repos.posts.clone(),
                repos.users.clone(),
                validation,
            )),
            users: Arc::new(UsersService::new(
                repos.users.clone(),
                passwords.clone(),
                validation,
            )),
            auth: Arc::new(AuthService::new(
                repos.users.clone(),
                tokens,
                passwords,
                validation,
            )),
            blogs_query: Arc::new(QueryBlogsRepository::new(repos.blogs.clone())),
            posts_query: Arc::new(QueryPostsRepository::new(
                repos.posts.clone(),
                repos.blogs.clone(),
            )),
            comments_query: Arc::new(QueryCommentsRepository::new(
                repos.comments.clone(),
                repos.posts.clone(),
            )),
            users_query: Arc::new(QueryUsersRepository::new(repos.users)),
            storage,
        }
    }
}
