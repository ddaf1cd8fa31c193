//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod query;
mod repository;

pub use auth::{AuthError, PasswordService, RecoveryClaims, TokenClaims, TokenService};
pub use query::{BlogFilter, CommentFilter, PostFilter, SortValue, Sortable, UserFilter};
pub use repository::{
    BaseRepository, BlogRepository, CommentRepository, PostRepository, UserRepository,
};
