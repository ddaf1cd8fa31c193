//! Post handlers, including likes and comments under a post.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogger_shared::dto::{
    CommentsQuery, CreateCommentDto, CreateLikeDto, CreatePostDto, PostsQuery, UpdatePostDto,
};

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<PostsQuery>,
    viewer: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let page = state
        .posts_query
        .find_all_posts(&query, viewer.user_id())
        .await?;
    Ok(HttpResponse::Ok().json(page))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostDto>,
) -> AppResult<HttpResponse> {
    let id = state.posts.create_post(body.into_inner()).await?;
    let post = state.posts_query.find_one_post(id, None).await?;
    Ok(HttpResponse::Created().json(post))
}

/// GET /api/posts/{id}
pub async fn get_one(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    viewer: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let post = state.posts_query.find_one_post(*id, viewer.user_id()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<UpdatePostDto>,
) -> AppResult<HttpResponse> {
    state.posts.update_post(*id, body.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/posts/{id}
pub async fn remove(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.posts.remove_post(*id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// PUT /api/posts/{id}/like-status
pub async fn set_like(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    identity: Identity,
    body: web::Json<CreateLikeDto>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .set_like(*id, identity.user_id, body.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/posts/{id}/comments
pub async fn list_comments(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    query: web::Query<CommentsQuery>,
    viewer: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let page = state
        .comments_query
        .find_comments_of_post(*id, &query, viewer.user_id())
        .await?;
    Ok(HttpResponse::Ok().json(page))
}

/// POST /api/posts/{id}/comments
pub async fn create_comment(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    identity: Identity,
    body: web::Json<CreateCommentDto>,
) -> AppResult<HttpResponse> {
    let comment_id = state
        .comments
        .create_comment(*id, identity.user_id, body.into_inner())
        .await?;
    let comment = state
        .comments_query
        .find_one_comment(comment_id, Some(identity.user_id))
        .await?;
    Ok(HttpResponse::Created().json(comment))
}
