//! # Blogger API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use blogger_core::ports::{PasswordService, TokenService};
use blogger_infra::{Argon2PasswordService, JwtTokenService};

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use middleware::error::{path_error_handler, payload_error_handler};
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // .env.local wins over .env
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Blogger API Server on {}:{}",
        config.host,
        config.port
    );

    let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());
    let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

    let state = AppState::new(config.database.as_ref(), tokens.clone(), passwords).await;

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(configure_app(state.clone(), tokens.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}

/// Shared data, extractor error handling and routes.
pub fn configure_app(
    state: AppState,
    tokens: Arc<dyn TokenService>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .app_data(web::Data::new(tokens))
            .app_data(web::JsonConfig::default().error_handler(payload_error_handler))
            .app_data(web::QueryConfig::default().error_handler(payload_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .configure(handlers::configure_routes);
    }
}
