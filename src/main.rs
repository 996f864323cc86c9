use std::sync::Arc;

use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{App, HttpServer};
use quotewall::application::moderation_service::ModerationService;
use quotewall::data::post_store::PostgresPostStore;
use quotewall::infrastructure::config::AppConfig;
use quotewall::infrastructure::database::connect;
use quotewall::infrastructure::logging::init_logging;
use quotewall::presentation::middleware::{RequestIdMiddleware, TimingMiddleware};
use quotewall::server::{build_cors, configure_app};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let config = AppConfig::from_env().expect("invalid configuration");
    let admin = config
        .admin_credentials()
        .expect("invalid admin credentials");
    let pool = connect(&config)
        .await
        .expect("failed to prepare database");

    let store = Arc::new(PostgresPostStore::new(pool));
    let service = ModerationService::new(store);

    let config_data = config.clone();

    HttpServer::new(move || {
        let cors = build_cors(&config_data);
        App::new()
            .wrap(Logger::default())
            .wrap(TimingMiddleware)
            // Registered after the timer so it runs first and the
            // timing log can pick the id out of request extensions.
            .wrap(RequestIdMiddleware)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer"))
                    .add(("Permissions-Policy", "geolocation=()"))
                    .add(("Cross-Origin-Opener-Policy", "same-origin")),
            )
            .wrap(cors)
            .configure(|cfg| configure_app(cfg, service.clone(), admin.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
