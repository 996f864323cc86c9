use actix_cors::Cors;
use actix_web::{HttpResponse, Responder, get, web};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::moderation_service::ModerationService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::security::AdminCredentials;
use crate::presentation::handlers;
use crate::presentation::middleware::AdminAuthMiddleware;

/// Registers the full routing table on a bare `App`. `main` and the
/// integration tests assemble the same application through this, they
/// only differ in which `PostStore` backs the service.
pub fn configure_app(
    cfg: &mut web::ServiceConfig,
    service: ModerationService,
    admin: AdminCredentials,
) {
    cfg.app_data(web::Data::new(service))
        .service(handlers::public::index)
        .service(handlers::public::new_post_form)
        .service(handlers::public::submit_post)
        .service(handlers::public::approved_feed)
        .service(health)
        .service(
            web::scope("/admin")
                .wrap(AdminAuthMiddleware::new(admin))
                .service(handlers::admin::list_posts)
                .service(handlers::admin::decide_post),
        );
}

pub fn build_cors(config: &AppConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::AUTHORIZATION,
        ])
        .max_age(3600);

    // `allowed_origin` refuses the wildcard outright.
    if config.cors_origins.iter().any(|origin| origin == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.cors_origins {
            cors = cors.allowed_origin(origin);
        }
        cors = cors.supports_credentials();
    }

    cors
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}
