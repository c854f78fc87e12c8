//! Page state: the fetched posts, the form, and the outcome of the last call

use crate::api::PostsBackend;
use crate::error::ClientError;
use crate::models::{Post, PostForm};
use std::sync::Arc;
use tracing::warn;

/// Outcome of the most recent API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Succeeded,
    Failed(String),
}

pub struct BlogApp {
    backend: Arc<dyn PostsBackend>,
    posts: Vec<Post>,
    form: PostForm,
    last_request: RequestState,
}

impl BlogApp {
    pub fn new(backend: Arc<dyn PostsBackend>) -> Self {
        Self {
            backend,
            posts: Vec::new(),
            form: PostForm::default(),
            last_request: RequestState::Idle,
        }
    }

    /// Posts in the order the API returned them
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn form(&self) -> &PostForm {
        &self.form
    }

    pub fn last_request(&self) -> &RequestState {
        &self.last_request
    }

    pub fn set_form(&mut self, form: PostForm) {
        self.form = form;
    }

    /// Initial load. On failure the current list is kept.
    pub async fn mount(&mut self) -> Result<(), ClientError> {
        match self.backend.fetch_posts().await {
            Ok(posts) => {
                self.posts = posts;
                self.last_request = RequestState::Succeeded;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch posts");
                self.last_request = RequestState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Send the form as a new post and clear it. The list is not reloaded.
    ///
    /// The form keeps its values when the create call fails.
    pub async fn create(&mut self) -> Result<u64, ClientError> {
        match self.backend.create_post(&self.form).await {
            Ok(created) => {
                self.form = PostForm::default();
                self.last_request = RequestState::Succeeded;
                Ok(created.new_post_id)
            }
            Err(e) => {
                warn!(error = %e, "failed to create post");
                self.last_request = RequestState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// [`create`](Self::create), then reload the list.
    pub async fn submit(&mut self) -> Result<u64, ClientError> {
        let new_post_id = self.create().await?;
        // A failed reload is already recorded in `last_request`.
        let _ = self.mount().await;

        Ok(new_post_id)
    }
}
