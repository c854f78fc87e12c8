//! HTTP client for the posts API

use crate::error::ClientError;
use crate::models::{ApiErrorBody, CreatedPost, Post, PostForm};
use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

/// The two calls the page makes against blog-service
#[async_trait]
pub trait PostsBackend: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<Post>, ClientError>;

    async fn create_post(&self, form: &PostForm) -> Result<CreatedPost, ClientError>;
}

/// `PostsBackend` over HTTP
///
/// No timeout is configured; a request that never completes never updates
/// the page.
#[derive(Clone)]
pub struct PostsApi {
    client: Client,
    base_url: String,
}

impl PostsApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }
}

#[async_trait]
impl PostsBackend for PostsApi {
    async fn fetch_posts(&self) -> Result<Vec<Post>, ClientError> {
        let url = self.posts_url();
        debug!(%url, "fetching posts");

        let response = self.client.get(&url).send().await?;
        let posts = ensure_success(response).await?.json::<Vec<Post>>().await?;

        Ok(posts)
    }

    async fn create_post(&self, form: &PostForm) -> Result<CreatedPost, ClientError> {
        let url = self.posts_url();
        debug!(%url, "creating post");

        let response = self.client.post(&url).json(form).send().await?;
        let created = ensure_success(response).await?.json::<CreatedPost>().await?;

        Ok(created)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or(text);

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}
