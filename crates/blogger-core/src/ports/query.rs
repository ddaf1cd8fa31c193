//! Filters and sort keys understood by the repositories' list queries.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Blog, Comment, Post, User};

/// Blogs whose name contains `name_term`, ignoring case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFilter {
    pub name_term: Option<String>,
}

impl BlogFilter {
    pub fn matches(&self, blog: &Blog) -> bool {
        self.name_term
            .as_deref()
            .is_none_or(|term| contains_ignore_case(&blog.name, term))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub blog_id: Option<Uuid>,
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        self.blog_id.is_none_or(|id| post.blog_id == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentFilter {
    pub post_id: Option<Uuid>,
}

impl CommentFilter {
    pub fn matches(&self, comment: &Comment) -> bool {
        self.post_id.is_none_or(|id| comment.post_id == id)
    }
}

/// Users matching either term, ignoring case. No terms matches everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub login_term: Option<String>,
    pub email_term: Option<String>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        let by_login = self
            .login_term
            .as_deref()
            .map(|term| contains_ignore_case(&user.login, term));
        let by_email = self
            .email_term
            .as_deref()
            .map(|term| contains_ignore_case(&user.email, term));

        match (by_login, by_email) {
            (None, None) => true,
            (login, email) => login.unwrap_or(false) || email.unwrap_or(false),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// A comparable field value used to order documents.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Text(String),
    Time(DateTime<Utc>),
}

impl SortValue {
    /// Text compares without regard to case.
    pub fn text(value: &str) -> Self {
        SortValue::Text(value.to_lowercase())
    }
}

/// Maps API sort field names onto entity values.
///
/// Unknown field names sort by `createdAt`.
pub trait Sortable {
    fn sort_value(&self, field: &str) -> SortValue;
}

impl Sortable for Blog {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "name" => SortValue::text(&self.name),
            "description" => SortValue::text(&self.description),
            "websiteUrl" => SortValue::text(&self.website_url),
            _ => SortValue::Time(self.created_at),
        }
    }
}

impl Sortable for Post {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "title" => SortValue::text(&self.title),
            "shortDescription" => SortValue::text(&self.short_description),
            "content" => SortValue::text(&self.content),
            "blogId" => SortValue::text(&self.blog_id.to_string()),
            "blogName" => SortValue::text(&self.blog_name),
            _ => SortValue::Time(self.created_at),
        }
    }
}

impl Sortable for Comment {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "content" => SortValue::text(&self.content),
            _ => SortValue::Time(self.created_at),
        }
    }
}

impl Sortable for User {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "login" => SortValue::text(&self.login),
            "email" => SortValue::text(&self.email),
            _ => SortValue::Time(self.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BlogData;

    fn blog(name: &str) -> Blog {
        Blog::new(BlogData {
            name: name.to_string(),
            description: String::new(),
            website_url: "https://example.com".to_string(),
        })
    }

    #[test]
    fn test_blog_filter_is_case_insensitive_substring() {
        let filter = BlogFilter {
            name_term: Some("tech".to_string()),
        };
        assert!(filter.matches(&blog("Tech News")));
        assert!(filter.matches(&blog("TechCrunch")));
        assert!(filter.matches(&blog("biotech")));
        assert!(!filter.matches(&blog("Sports")));
        assert!(BlogFilter::default().matches(&blog("Sports")));
    }

    #[test]
    fn test_user_filter_matches_either_term() {
        let user = User::new(
            "alice".to_string(),
            "al@example.com".to_string(),
            "hash".to_string(),
        );
        let filter = UserFilter {
            login_term: Some("zzz".to_string()),
            email_term: Some("EXAMPLE".to_string()),
        };
        assert!(filter.matches(&user));

        let miss = UserFilter {
            login_term: Some("bob".to_string()),
            email_term: None,
        };
        assert!(!miss.matches(&user));
        assert!(UserFilter::default().matches(&user));
    }

    #[test]
    fn test_unknown_sort_field_uses_created_at() {
        let b = blog("Tech");
        assert_eq!(b.sort_value("nope"), SortValue::Time(b.created_at));
        assert_eq!(b.sort_value("name"), SortValue::text("Tech"));
    }

    #[test]
    fn test_text_sorts_ignoring_case() {
        assert!(blog("apple").sort_value("name") < blog("Banana").sort_value("name"));
        assert_eq!(blog("TECH").sort_value("name"), blog("tech").sort_value("name"));
    }
}
