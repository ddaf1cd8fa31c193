//! Read-side query repositories.
//!
//! Each one builds a filter, counts under it, asks the pagination helper for
//! the page window and maps the fetched entities to their public response
//! shapes. None of them mutate anything.

mod blogs;
mod comments;
mod mapping;
mod posts;
mod users;

pub use blogs::QueryBlogsRepository;
pub use comments::QueryCommentsRepository;
pub use mapping::{NEWEST_LIKES_LIMIT, comment_response, post_response};
pub use posts::QueryPostsRepository;
pub use users::QueryUsersRepository;

/// Blank search terms match everything.
fn search_term(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
