/// Liveness and readiness endpoints
use crate::db::PostStore;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Instant;

pub const ROOT_MESSAGE: &str = "Server is up and running";

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Unhealthy,
}

#[derive(Serialize)]
struct ComponentCheck {
    status: ComponentStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
}

#[derive(Serialize)]
struct ReadinessResponse {
    ready: bool,
    status: ComponentStatus,
    checks: HashMap<String, ComponentCheck>,
    timestamp: String,
}

/// Plain-text liveness message on `/`
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Server is running", body = String, content_type = "text/plain"))
)]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(ROOT_MESSAGE)
}

pub async fn health_summary(store: web::Data<dyn PostStore>) -> HttpResponse {
    match store.ping().await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "blog-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unhealthy",
                "error": "post store unreachable",
                "service": "blog-service"
            }))
        }
    }
}

pub async fn readiness_summary(store: web::Data<dyn PostStore>) -> HttpResponse {
    let mut checks = HashMap::new();

    let start = Instant::now();
    let store_result = store.ping().await;
    let latency_ms = Some(start.elapsed().as_millis() as u64);

    let ready = store_result.is_ok();
    let store_check = match store_result {
        Ok(_) => ComponentCheck {
            status: ComponentStatus::Healthy,
            message: "Post store reachable".to_string(),
            latency_ms,
        },
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            ComponentCheck {
                status: ComponentStatus::Unhealthy,
                message: "Post store unreachable".to_string(),
                latency_ms,
            }
        }
    };
    checks.insert("mysql".to_string(), store_check);

    let response = ReadinessResponse {
        ready,
        status: if ready {
            ComponentStatus::Healthy
        } else {
            ComponentStatus::Unhealthy
        },
        checks,
        timestamp: Utc::now().to_rfc3339(),
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}
