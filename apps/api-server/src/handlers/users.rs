//! User administration handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogger_shared::dto::{CreateUserDto, UsersQuery};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/users
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<UsersQuery>,
) -> AppResult<HttpResponse> {
    let page = state.users_query.find_all_users(&query).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// POST /api/users
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateUserDto>,
) -> AppResult<HttpResponse> {
    let id = state.users.create_user(body.into_inner()).await?;
    let user = state.users_query.find_one_user(id).await?;
    Ok(HttpResponse::Created().json(user))
}

/// DELETE /api/users/{id}
pub async fn remove(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.users.remove_user(*id).await?;
    Ok(HttpResponse::NoContent().finish())
}
