/// OpenAPI documentation for Blog Service
use crate::error::AppError;
use crate::handlers;
use crate::models::{CreatePostResponse, ErrorResponse, NewPost, Post};
use actix_web::HttpResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog Service API",
        version = "1.0.0",
        description = "Lists and creates blog posts stored in a MySQL `posts` table.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:5050", description = "Development server"),
    ),
    paths(
        handlers::health::root,
        handlers::posts::list_posts,
        handlers::posts::create_post,
    ),
    components(
        schemas(Post, NewPost, CreatePostResponse, ErrorResponse)
    ),
    tags(
        (name = "health", description = "Service liveness"),
        (name = "posts", description = "Post listing and creation"),
    ),
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/openapi.json"
    }
}

pub async fn openapi_json() -> Result<HttpResponse, AppError> {
    let body = ApiDoc::openapi()
        .to_json()
        .map_err(|e| AppError::Internal(format!("OpenAPI serialization failed: {e}")))?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_post_routes() {
        let doc = ApiDoc::openapi();
        let posts = doc.paths.paths.get("/posts").expect("/posts documented");
        assert!(posts.operations.len() >= 2);
        assert!(doc.paths.paths.contains_key("/"));
    }
}
