//! Shared fixtures for blog-service integration tests

#![allow(dead_code)]

use actix_web::web;
use async_trait::async_trait;
use blog_service::models::{NewPost, Post};
use blog_service::{PostStore, StoreError};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the `posts` table
///
/// Mirrors the table's NOT NULL columns: a missing title or body is rejected.
#[derive(Default)]
pub struct InMemoryPostStore {
    rows: Mutex<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Seed a row as the table would return it, extra columns included
    pub fn insert_row(&self, post: Post) {
        self.rows.lock().unwrap().push(post);
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts = self.rows.lock().unwrap().clone();
        posts.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(posts)
    }

    async fn create_post(&self, new_post: &NewPost) -> Result<u64, StoreError> {
        let (Some(title), Some(body)) = (new_post.title.clone(), new_post.body.clone()) else {
            return Err(StoreError::Database(sqlx::Error::Protocol(
                "Column cannot be null".to_string(),
            )));
        };

        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        rows.push(Post::new(id, title, body));
        Ok(id)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Store whose every operation fails as if the connection were lost
pub struct FailingPostStore;

#[async_trait]
impl PostStore for FailingPostStore {
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn create_post(&self, _new_post: &NewPost) -> Result<u64, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }
}

pub fn store_data<S: PostStore + 'static>(store: S) -> web::Data<dyn PostStore> {
    let store: Arc<dyn PostStore> = Arc::new(store);
    web::Data::from(store)
}
