//! HTML rendering of the blog page

use crate::models::{Post, PostForm};
use crate::state::BlogApp;

pub const EMPTY_PLACEHOLDER: &str = "No posts yet, why don't create new one!";

/// Render the whole page for the current state
///
/// `last_request` is not shown; a failed call leaves the page as it was.
pub fn render_page(app: &BlogApp) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Blog</title>
</head>
<body>
    <div class="app">
        <h1>Welcome to our fancy blog!</h1>
        <p>We've been waiting for you!</p>
        <div class="post-container">
            <section class="posts">
{posts}
            </section>
{form}
        </div>
    </div>
</body>
</html>
"#,
        posts = render_posts(app.posts()),
        form = render_form(app.form()),
    )
}

pub fn render_posts(posts: &[Post]) -> String {
    if posts.is_empty() {
        return format!("                <p>{}</p>", escape_html(EMPTY_PLACEHOLDER));
    }

    posts
        .iter()
        .map(render_post)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_post(post: &Post) -> String {
    format!(
        r#"                <article class="post" data-id="{id}">
                    <h2>{title}</h2>
                    <p>{body}</p>
                </article>"#,
        id = post.id,
        title = escape_html(&post.title),
        body = escape_html(&post.body),
    )
}

pub fn render_form(form: &PostForm) -> String {
    format!(
        r#"            <form method="post" action="/">
                <div class="form-input">
                    <label for="title">Title:</label>
                    <input type="text" id="title" name="title" value="{title}">
                </div>
                <div class="form-input">
                    <label for="body">Text:</label>
                    <textarea id="body" name="body">{body}</textarea>
                </div>
                <div>
                    <button type="submit">Create New Post</button>
                </div>
            </form>"#,
        title = escape_html(&form.title),
        body = escape_html(&form.body),
    )
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str, body: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let html = render_posts(&[]);
        assert!(html.contains("No posts yet, why don&#39;t create new one!"));
        assert!(!html.contains("<article"));
    }

    #[test]
    fn posts_render_in_given_order() {
        let html = render_posts(&[post(2, "Second", "b"), post(1, "First", "a")]);

        let second = html.find("<h2>Second</h2>").unwrap();
        let first = html.find("<h2>First</h2>").unwrap();
        assert!(second < first);
        assert!(!html.contains("No posts yet"));
    }

    #[test]
    fn user_text_is_escaped() {
        let html = render_posts(&[post(1, "<script>alert(1)</script>", "Tom & \"Jerry\"")]);
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; &quot;Jerry&quot;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn form_carries_current_values() {
        let html = render_form(&PostForm::new("Draft title", "Draft <b>body</b>"));
        assert!(html.contains(r#"name="title" value="Draft title""#));
        assert!(html.contains("Draft &lt;b&gt;body&lt;/b&gt;</textarea>"));
        assert!(html.contains(r#"<form method="post" action="/">"#));
    }
}
