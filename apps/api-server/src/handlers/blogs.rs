//! Blog handlers, including posts addressed through their blog.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogger_shared::dto::{BlogsQuery, CreateBlogDto, CreatePostOfBlogDto, PostsQuery, UpdateBlogDto};

use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/blogs
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<BlogsQuery>,
) -> AppResult<HttpResponse> {
    let page = state.blogs_query.find_all_blogs(&query).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// POST /api/blogs
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogDto>,
) -> AppResult<HttpResponse> {
    let id = state.blogs.create_blog(body.into_inner()).await?;
    let blog = state.blogs_query.find_one_blog(id).await?;
    Ok(HttpResponse::Created().json(blog))
}

/// GET /api/blogs/{id}
pub async fn get_one(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let blog = state.blogs_query.find_one_blog(*id).await?;
    Ok(HttpResponse::Ok().json(blog))
}

/// PUT /api/blogs/{id}
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<UpdateBlogDto>,
) -> AppResult<HttpResponse> {
    state.blogs.update_blog(*id, body.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/blogs/{id}
pub async fn remove(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.blogs.remove_blog(*id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/blogs/{id}/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    query: web::Query<PostsQuery>,
    viewer: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let page = state
        .posts_query
        .find_posts_of_blog(*id, &query, viewer.user_id())
        .await?;
    Ok(HttpResponse::Ok().json(page))
}

/// POST /api/blogs/{id}/posts
pub async fn create_post(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<CreatePostOfBlogDto>,
) -> AppResult<HttpResponse> {
    let post_id = state.posts.create_post_of_blog(body.into_inner(), *id).await?;
    let post = state.posts_query.find_one_post(post_id, None).await?;
    Ok(HttpResponse::Created().json(post))
}
