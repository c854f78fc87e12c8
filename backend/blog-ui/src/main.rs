use actix_web::{middleware::Logger, web, App, HttpServer};
use blog_ui::handlers;
use blog_ui::{PostsApi, PostsBackend, UiConfig};
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Blog web client
///
/// Serves the blog page and forwards form submissions to blog-service.
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,blog_ui=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match UiConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting blog-ui v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Using posts API at {}", config.api_base_url);

    let backend: Arc<dyn PostsBackend> = Arc::new(PostsApi::new(&config.api_base_url));
    let backend_data = web::Data::from(backend);

    let bind_address = config.bind_address();
    tracing::info!("Starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(backend_data.clone())
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(handlers::configure_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}
