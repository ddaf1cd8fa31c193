//! Comment handlers. Changes are limited to the commentator.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogger_shared::dto::{CreateLikeDto, UpdateCommentDto};

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/comments/{id}
pub async fn get_one(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    viewer: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let comment = state
        .comments_query
        .find_one_comment(*id, viewer.user_id())
        .await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// PUT /api/comments/{id}
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    identity: Identity,
    body: web::Json<UpdateCommentDto>,
) -> AppResult<HttpResponse> {
    state
        .comments
        .update_comment(*id, identity.user_id, body.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/comments/{id}
pub async fn remove(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    state.comments.remove_comment(*id, identity.user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// PUT /api/comments/{id}/like-status
pub async fn set_like(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    identity: Identity,
    body: web::Json<CreateLikeDto>,
) -> AppResult<HttpResponse> {
    state
        .comments
        .set_like(*id, identity.user_id, body.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
