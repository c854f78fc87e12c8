//! Blog web client
//!
//! Talks to blog-service over HTTP, keeps the fetched posts and the
//! new-post form in [`state::BlogApp`], and renders them as a single HTML
//! page.

pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod view;

pub use api::{PostsApi, PostsBackend};
pub use config::UiConfig;
pub use error::ClientError;
pub use state::{BlogApp, RequestState};
