use std::sync::Arc;

use uuid::Uuid;

use blogger_shared::Paginated;
use blogger_shared::dto::{UserResponse, UsersQuery};

use crate::error::DomainError;
use crate::pagination::paginate;
use crate::ports::{UserFilter, UserRepository};

use super::search_term;

pub struct QueryUsersRepository {
    users: Arc<dyn UserRepository>,
}

impl QueryUsersRepository {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn find_all_users(
        &self,
        query: &UsersQuery,
    ) -> Result<Paginated<UserResponse>, DomainError> {
        let filter = UserFilter {
            login_term: search_term(query.search_login_term.as_deref()),
            email_term: search_term(query.search_email_term.as_deref()),
        };

        let total_count = self.users.count(&filter).await?;
        let pagination = paginate(&query.pagination(), total_count);
        let users = self
            .users
            .find_many(&filter, &pagination.page_request())
            .await?;

        Ok(pagination.into_page(total_count, users.into_iter().map(Into::into).collect()))
    }

    pub async fn find_one_user(&self, id: Uuid) -> Result<UserResponse, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or(DomainError::UserNotFound(id))
    }
}
