//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{ColumnType, Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use uuid::Uuid;

use blogger_core::domain::{Blog, Comment, Post, User};
use blogger_core::error::RepoError;
use blogger_core::pagination::{PageRequest, SortDirection};
use blogger_core::ports::{
    BlogFilter, BlogRepository, CommentFilter, CommentRepository, PostFilter, PostRepository,
    UserFilter, UserRepository,
};

use super::entity::blog::{self, Entity as BlogEntity};
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{Persisted, PostgresBaseRepository, query_error};

/// PostgreSQL blog repository.
pub type PostgresBlogRepository = PostgresBaseRepository<BlogEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// Case-insensitive substring match. `term` is taken literally.
fn contains_ignore_case<C: ColumnTrait>(column: C, term: &str) -> Condition {
    let escaped = term
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    let pattern = LikeExpr::new(format!("%{escaped}%")).escape('\\');

    Condition::all().add(Expr::expr(Func::lower(Expr::col(column))).like(pattern))
}

fn order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

/// Text columns order by their lowercase form, the same as the in-memory store.
fn sort_expr<C: ColumnTrait>(column: C) -> SimpleExpr {
    match column.def().get_column_type() {
        ColumnType::String(_) | ColumnType::Text => Func::lower(Expr::col(column)).into(),
        _ => Expr::col(column).into(),
    }
}

/// Apply ordering, skip and limit, then convert the rows.
async fn fetch_page<E, T, C>(
    repo: &PostgresBaseRepository<E>,
    select: Select<E>,
    sort_column: C,
    id_column: C,
    page: &PageRequest,
) -> Result<Vec<T>, RepoError>
where
    E: EntityTrait,
    C: ColumnTrait,
    T: Persisted<E>,
{
    select
        .order_by(sort_expr(sort_column), order(page.sort.direction))
        .order_by(id_column, Order::Asc)
        .offset(page.skip)
        .limit(page.limit)
        .all(repo.db.as_ref())
        .await
        .map_err(query_error)?
        .into_iter()
        .map(T::from_model)
        .collect()
}

fn blog_condition(filter: &BlogFilter) -> Condition {
    let mut condition = Condition::all();
    if let Some(term) = filter.name_term.as_deref() {
        condition = condition.add(contains_ignore_case(blog::Column::Name, term));
    }
    condition
}

fn blog_sort_column(field: &str) -> blog::Column {
    match field {
        "name" => blog::Column::Name,
        "description" => blog::Column::Description,
        "websiteUrl" => blog::Column::WebsiteUrl,
        _ => blog::Column::CreatedAt,
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn count(&self, filter: &BlogFilter) -> Result<u64, RepoError> {
        BlogEntity::find()
            .filter(blog_condition(filter))
            .count(self.db.as_ref())
            .await
            .map_err(query_error)
    }

    async fn find_many(
        &self,
        filter: &BlogFilter,
        page: &PageRequest,
    ) -> Result<Vec<Blog>, RepoError> {
        let select = BlogEntity::find().filter(blog_condition(filter));
        fetch_page(
            self,
            select,
            blog_sort_column(&page.sort.field),
            blog::Column::Id,
            page,
        )
        .await
    }
}

fn post_condition(filter: &PostFilter) -> Condition {
    let mut condition = Condition::all();
    if let Some(blog_id) = filter.blog_id {
        condition = condition.add(post::Column::BlogId.eq(blog_id));
    }
    condition
}

fn post_sort_column(field: &str) -> post::Column {
    match field {
        "title" => post::Column::Title,
        "shortDescription" => post::Column::ShortDescription,
        "content" => post::Column::Content,
        "blogId" => post::Column::BlogId,
        "blogName" => post::Column::BlogName,
        _ => post::Column::CreatedAt,
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn count(&self, filter: &PostFilter) -> Result<u64, RepoError> {
        PostEntity::find()
            .filter(post_condition(filter))
            .count(self.db.as_ref())
            .await
            .map_err(query_error)
    }

    async fn find_many(
        &self,
        filter: &PostFilter,
        page: &PageRequest,
    ) -> Result<Vec<Post>, RepoError> {
        let select = PostEntity::find().filter(post_condition(filter));
        fetch_page(
            self,
            select,
            post_sort_column(&page.sort.field),
            post::Column::Id,
            page,
        )
        .await
    }

    async fn rename_blog(&self, blog_id: Uuid, blog_name: &str) -> Result<u64, RepoError> {
        let result = PostEntity::update_many()
            .col_expr(post::Column::BlogName, Expr::value(blog_name.to_string()))
            .filter(post::Column::BlogId.eq(blog_id))
            .exec(self.db.as_ref())
            .await
            .map_err(query_error)?;

        tracing::debug!(%blog_id, rows = result.rows_affected, "Renamed blog on posts");
        Ok(result.rows_affected)
    }
}

fn comment_condition(filter: &CommentFilter) -> Condition {
    let mut condition = Condition::all();
    if let Some(post_id) = filter.post_id {
        condition = condition.add(comment::Column::PostId.eq(post_id));
    }
    condition
}

fn comment_sort_column(field: &str) -> comment::Column {
    match field {
        "content" => comment::Column::Content,
        _ => comment::Column::CreatedAt,
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn count(&self, filter: &CommentFilter) -> Result<u64, RepoError> {
        CommentEntity::find()
            .filter(comment_condition(filter))
            .count(self.db.as_ref())
            .await
            .map_err(query_error)
    }

    async fn find_many(
        &self,
        filter: &CommentFilter,
        page: &PageRequest,
    ) -> Result<Vec<Comment>, RepoError> {
        let select = CommentEntity::find().filter(comment_condition(filter));
        fetch_page(
            self,
            select,
            comment_sort_column(&page.sort.field),
            comment::Column::Id,
            page,
        )
        .await
    }
}

/// Either term may match. No terms leaves the query unfiltered.
fn user_condition(filter: &UserFilter) -> Condition {
    let terms: Vec<Condition> = [
        filter
            .login_term
            .as_deref()
            .map(|term| contains_ignore_case(user::Column::Login, term)),
        filter
            .email_term
            .as_deref()
            .map(|term| contains_ignore_case(user::Column::Email, term)),
    ]
    .into_iter()
    .flatten()
    .collect();

    if terms.is_empty() {
        return Condition::all();
    }
    terms
        .into_iter()
        .fold(Condition::any(), |any, term| any.add(term))
}

fn user_sort_column(field: &str) -> user::Column {
    match field {
        "login" => user::Column::Login,
        "email" => user::Column::Email,
        _ => user::Column::CreatedAt,
    }
}

fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = match local.chars().next() {
                Some(first) if local.chars().count() > 1 => format!("{first}***"),
                _ => "***".to_string(),
            };
            format!("{masked_local}{domain}")
        }
        None => "***".to_string(),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(query_error)?
            .map(User::from_model)
            .transpose()
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepoError> {
        UserEntity::find()
            .filter(user::Column::Login.eq(login))
            .one(self.db.as_ref())
            .await
            .map_err(query_error)?
            .map(User::from_model)
            .transpose()
    }

    async fn count(&self, filter: &UserFilter) -> Result<u64, RepoError> {
        UserEntity::find()
            .filter(user_condition(filter))
            .count(self.db.as_ref())
            .await
            .map_err(query_error)
    }

    async fn find_many(
        &self,
        filter: &UserFilter,
        page: &PageRequest,
    ) -> Result<Vec<User>, RepoError> {
        let select = UserEntity::find().filter(user_condition(filter));
        fetch_page(
            self,
            select,
            user_sort_column(&page.sort.field),
            user::Column::Id,
            page,
        )
        .await
    }
}
