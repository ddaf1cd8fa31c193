//! Authentication handlers.

use actix_web::{HttpResponse, web};

use blogger_shared::dto::{CreateUserDto, LoginDto, NewPasswordDto, PasswordRecoveryDto};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/auth/registration
pub async fn registration(
    state: web::Data<AppState>,
    body: web::Json<CreateUserDto>,
) -> AppResult<HttpResponse> {
    state.users.create_user(body.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginDto>,
) -> AppResult<HttpResponse> {
    let auth = state.auth.login(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(auth))
}

/// POST /api/auth/password-recovery
///
/// Answers 204 whether or not the email is registered.
pub async fn password_recovery(
    state: web::Data<AppState>,
    body: web::Json<PasswordRecoveryDto>,
) -> AppResult<HttpResponse> {
    // No mailer is wired in, so an issued code is dropped here.
    let issued = state.auth.password_recovery(body.into_inner()).await?;
    tracing::debug!(issued = issued.is_some(), "Password recovery handled");
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/auth/new-password
pub async fn new_password(
    state: web::Data<AppState>,
    body: web::Json<NewPasswordDto>,
) -> AppResult<HttpResponse> {
    state.auth.new_password(body.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/auth/me - Protected route
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    tracing::debug!(login = %identity.login, "Resolving current user");
    let me = state.auth.me(identity.user_id).await?;
    Ok(HttpResponse::Ok().json(me))
}
