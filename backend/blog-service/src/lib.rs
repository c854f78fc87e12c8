/// Blog Service Library
///
/// HTTP API for a small blog: lists posts and creates new ones on top of a
/// MySQL `posts` table.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route registration
/// - `models`: Post records and request/response bodies
/// - `db`: `PostStore` query layer and its MySQL implementation
/// - `middleware`: request metrics middleware
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors and the `/metrics` handler
/// - `openapi`: OpenAPI document for the HTTP surface
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;

pub use config::Config;
pub use db::{MySqlPostStore, PostStore, StoreError};
pub use error::{AppError, Result};
