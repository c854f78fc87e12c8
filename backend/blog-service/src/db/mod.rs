/// Database access layer
///
/// `PostStore` is the query layer the HTTP handlers talk to. Each operation is
/// a single round-trip to the store; nothing is cached or retried.
pub mod post_repo;

pub use post_repo::MySqlPostStore;

use crate::models::{NewPost, Post};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Logical post operations backed by the `posts` table
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, newest (highest id) first, each with every column of its row
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError>;

    /// Insert one post and return its store-assigned id
    async fn create_post(&self, new_post: &NewPost) -> Result<u64, StoreError>;

    /// Cheap round-trip used by readiness probes
    async fn ping(&self) -> Result<(), StoreError>;
}
