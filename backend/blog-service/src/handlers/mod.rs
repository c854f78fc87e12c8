/// HTTP handlers for blog-service
///
/// - Posts: list and create
/// - Health: liveness message on `/` plus health/readiness probes
pub mod health;
pub mod posts;

pub use health::{health_summary, liveness_check, readiness_summary, root};
pub use posts::{create_post, list_posts};

use crate::error::AppError;
use crate::openapi;
use actix_web::web;

/// Register every route of the service on an `App` or scope.
///
/// Expects a `web::Data<dyn PostStore>` to be registered by the caller.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(form_config())
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health_summary))
        .route("/health/ready", web::get().to(readiness_summary))
        .route("/health/live", web::get().to(liveness_check))
        .route("/metrics", web::get().to(crate::metrics::serve_metrics))
        .route(
            openapi::ApiDoc::openapi_json_path(),
            web::get().to(openapi::openapi_json),
        )
        .service(posts_resource("/posts"))
        // Path used by the web client behind its development proxy
        .service(posts_resource("/api/posts"));
}

fn posts_resource(path: &str) -> actix_web::Resource {
    web::resource(path)
        .route(web::get().to(list_posts))
        .route(web::post().to(create_post))
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
