/// Post handlers - HTTP endpoints for post operations
use crate::db::PostStore;
use crate::error::{AppError, Result};
use crate::metrics::record_post_operation;
use crate::models::{CreatePostResponse, ErrorResponse, NewPost, Post};
use actix_web::{web, Either, HttpResponse};

/// List all posts, newest first
#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    responses(
        (status = 200, description = "All posts, newest first", body = [Post]),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_posts(store: web::Data<dyn PostStore>) -> Result<HttpResponse> {
    let result = store.list_posts().await;
    record_post_operation("list", result.is_ok());

    let posts = result.map_err(|e| AppError::store("Error fetching posts", e))?;
    tracing::debug!(count = posts.len(), "listed posts");

    Ok(HttpResponse::Ok().json(posts))
}

/// Create a post from a JSON or form-encoded body
#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = NewPost,
    responses(
        (status = 201, description = "Post created", body = CreatePostResponse),
        (status = 400, description = "Body could not be decoded", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn create_post(
    store: web::Data<dyn PostStore>,
    payload: Either<web::Json<NewPost>, web::Form<NewPost>>,
) -> Result<HttpResponse> {
    let new_post = match payload {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    let result = store.create_post(&new_post).await;
    record_post_operation("create", result.is_ok());

    let new_post_id = result.map_err(|e| AppError::store("Error creating new post", e))?;
    tracing::info!(post_id = new_post_id, "post created");

    Ok(HttpResponse::Created().json(CreatePostResponse { new_post_id }))
}
