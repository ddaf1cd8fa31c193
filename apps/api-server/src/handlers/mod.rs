//! HTTP handlers and route configuration.

mod auth;
mod blogs;
mod comments;
mod health;
mod posts;
mod users;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/blogs")
                    .route("", web::get().to(blogs::list))
                    .route("", web::post().to(blogs::create))
                    .route("/{id}", web::get().to(blogs::get_one))
                    .route("/{id}", web::put().to(blogs::update))
                    .route("/{id}", web::delete().to(blogs::remove))
                    .route("/{id}/posts", web::get().to(blogs::list_posts))
                    .route("/{id}/posts", web::post().to(blogs::create_post)),
            )
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/{id}", web::get().to(posts::get_one))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::remove))
                    .route("/{id}/like-status", web::put().to(posts::set_like))
                    .route("/{id}/comments", web::get().to(posts::list_comments))
                    .route("/{id}/comments", web::post().to(posts::create_comment)),
            )
            .service(
                web::scope("/comments")
                    .route("/{id}", web::get().to(comments::get_one))
                    .route("/{id}", web::put().to(comments::update))
                    .route("/{id}", web::delete().to(comments::remove))
                    .route("/{id}/like-status", web::put().to(comments::set_like)),
            )
            .service(
                web::scope("/users")
                    .route("", web::get().to(users::list))
                    .route("", web::post().to(users::create))
                    .route("/{id}", web::delete().to(users::remove)),
            )
            .service(
                web::scope("/auth")
                    .route("/registration", web::post().to(auth::registration))
                    .route("/login", web::post().to(auth::login))
                    .route("/password-recovery", web::post().to(auth::password_recovery))
                    .route("/new-password", web::post().to(auth::new_password))
                    .route("/me", web::get().to(auth::me)),
            ),
    );
}
