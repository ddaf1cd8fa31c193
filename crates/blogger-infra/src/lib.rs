//! # Blogger Infrastructure
//!
//! Concrete implementations of the ports defined in `blogger-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL document storage via SeaORM
//! - `auth` - JWT access tokens, JWT recovery codes and Argon2 hashing

pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

pub use database::{
    DatabaseConfig, InMemoryBlogRepository, InMemoryCommentRepository, InMemoryPostRepository,
    InMemoryRepository, InMemoryUserRepository, Repositories,
};

#[cfg(feature = "postgres")]
pub use database::DatabaseConnections;

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
