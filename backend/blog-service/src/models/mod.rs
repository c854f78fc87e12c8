/// Data models for blog-service
///
/// - Post: a stored blog entry, with any extra columns of its row
/// - NewPost: client-supplied fields for a post about to be created
/// - CreatePostResponse / ErrorResponse: JSON response bodies
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A persisted blog post
///
/// The list endpoint returns rows as the table holds them, so columns beyond
/// `id`, `title` and `body` travel in `extra` and serialize alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    /// Store-assigned identifier
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            extra: Map::new(),
        }
    }
}

/// Fields accepted when creating a post
///
/// Missing fields are bound as `NULL`; whether that is acceptable is left to
/// the table's own constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewPost {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostResponse {
    pub new_post_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_response_uses_camel_case() {
        let body = serde_json::to_value(CreatePostResponse { new_post_id: 7 }).unwrap();
        assert_eq!(body, serde_json::json!({ "newPostId": 7 }));
    }

    #[test]
    fn extra_columns_serialize_next_to_core_fields() {
        let mut post = Post::new(3, "Hello", "World");
        post.extra
            .insert("created_at".to_string(), serde_json::json!("2024-01-01T10:00:00"));

        let body = serde_json::to_value(&post).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "id": 3,
                "title": "Hello",
                "body": "World",
                "created_at": "2024-01-01T10:00:00"
            })
        );

        let back: Post = serde_json::from_value(body).unwrap();
        assert_eq!(back, post);
    }

    #[test]
    fn plain_post_has_exactly_three_keys() {
        let body = serde_json::to_value(Post::new(1, "a", "b")).unwrap();
        assert_eq!(body.as_object().map(|o| o.len()), Some(3));
    }

    #[test]
    fn new_post_tolerates_missing_fields() {
        let post: NewPost = serde_json::from_str(r#"{"title":"only a title"}"#).unwrap();
        assert_eq!(post.title.as_deref(), Some("only a title"));
        assert_eq!(post.body, None);
    }
}
