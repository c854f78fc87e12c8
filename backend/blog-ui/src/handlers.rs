//! Page routes: `GET /` renders, `POST /` submits the form

use crate::api::PostsBackend;
use crate::models::PostForm;
use crate::state::BlogApp;
use crate::view::render_page;
use actix_web::http::header;
use actix_web::{web, HttpResponse};

const HTML: &str = "text/html; charset=utf-8";

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(index))
            .route(web::post().to(submit_post)),
    );
}

/// Fetch the posts and render the page
pub async fn index(backend: web::Data<dyn PostsBackend>) -> HttpResponse {
    let mut app = BlogApp::new(backend.into_inner());
    // Fetch errors are recorded on the app state; the page renders regardless.
    let _ = app.mount().await;

    HttpResponse::Ok().content_type(HTML).body(render_page(&app))
}

/// Create a post from the submitted form
///
/// Success only creates and redirects back to `/`, whose handler does the one
/// list fetch. A failed create re-renders the page with the form still filled
/// in.
pub async fn submit_post(
    backend: web::Data<dyn PostsBackend>,
    form: web::Form<PostForm>,
) -> HttpResponse {
    let mut app = BlogApp::new(backend.into_inner());
    app.set_form(form.into_inner());

    match app.create().await {
        Ok(_) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, "/"))
            .finish(),
        Err(_) => {
            let _ = app.mount().await;
            HttpResponse::Ok().content_type(HTML).body(render_page(&app))
        }
    }
}
