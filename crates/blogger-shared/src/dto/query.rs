//! Query-string parameters of the list endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Paging and ordering controls shared by every list query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationParams {
    pub page_number: Option<u64>,
    pub page_size: Option<u64>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

// Kept as plain fields on every query type: serde_urlencoded cannot parse
// numbers through #[serde(flatten)].
macro_rules! pagination_accessor {
    ($query:ty) => {
        impl $query {
            pub fn pagination(&self) -> PaginationParams {
                PaginationParams {
                    page_number: self.page_number,
                    page_size: self.page_size,
                    sort_by: self.sort_by.clone(),
                    sort_direction: self.sort_direction,
                }
            }
        }
    };
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogsQuery {
    pub search_name_term: Option<String>,
    pub page_number: Option<u64>,
    pub page_size: Option<u64>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsQuery {
    pub page_number: Option<u64>,
    pub page_size: Option<u64>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsQuery {
    pub page_number: Option<u64>,
    pub page_size: Option<u64>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersQuery {
    pub search_login_term: Option<String>,
    pub search_email_term: Option<String>,
    pub page_number: Option<u64>,
    pub page_size: Option<u64>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

pagination_accessor!(BlogsQuery);
pagination_accessor!(PostsQuery);
pagination_accessor!(CommentsQuery);
pagination_accessor!(UsersQuery);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blogs_query_from_json() {
        let query: BlogsQuery = serde_json::from_str(
            r#"{"searchNameTerm":"tech","pageSize":5,"sortDirection":"asc"}"#,
        )
        .unwrap();

        let pagination = query.pagination();
        assert_eq!(query.search_name_term.as_deref(), Some("tech"));
        assert_eq!(pagination.page_size, Some(5));
        assert_eq!(pagination.page_number, None);
        assert_eq!(pagination.sort_direction, Some(SortDirection::Asc));
    }
}
