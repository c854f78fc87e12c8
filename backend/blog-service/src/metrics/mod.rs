//! Prometheus metrics for blog-service.
//!
//! Exposes request and post-operation collectors and an HTTP handler for the
//! `/metrics` endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};

lazy_static! {
    /// Total HTTP requests by method, matched route and status.
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "http_requests_total",
        "Total HTTP requests segmented by method, route and status",
        &["method", "route", "status"]
    )
    .expect("failed to register http_requests_total");

    /// Request latency by method and matched route.
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "http_request_duration_seconds",
        "HTTP request duration segmented by method and route",
        &["method", "route"]
    )
    .expect("failed to register http_request_duration_seconds");

    /// Post store operations by outcome.
    pub static ref POSTS_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "posts_operations_total",
        "Post store operations segmented by operation and result",
        &["operation", "result"]
    )
    .expect("failed to register posts_operations_total");
}

/// Record the outcome of a `list`/`create` store call.
pub fn record_post_operation(operation: &str, success: bool) {
    let result = if success { "success" } else { "error" };
    POSTS_OPERATIONS_TOTAL
        .with_label_values(&[operation, result])
        .inc();
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
