use actix_web::{middleware::Logger, middleware::NormalizePath, web, App, HttpServer};
use blog_service::db::{MySqlPostStore, PostStore};
use blog_service::handlers;
use blog_service::middleware::MetricsMiddleware;
use db_pool::create_pool;
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = terminate.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

/// Probe the running service; used as the container healthcheck.
async fn run_healthcheck() -> io::Result<()> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "5050".to_string());
    let url = format!("http://127.0.0.1:{}/health/live", port);

    match reqwest::Client::new().get(&url).send().await {
        Ok(resp) if resp.status().is_success() => Ok(()),
        Ok(resp) => {
            eprintln!("healthcheck HTTP status: {}", resp.status());
            Err(io::Error::new(io::ErrorKind::Other, "healthcheck failed"))
        }
        Err(e) => {
            eprintln!("healthcheck HTTP error: {}", e);
            Err(io::Error::new(io::ErrorKind::Other, "healthcheck error"))
        }
    }
}

/// Blog Service
///
/// HTTP API in front of the `posts` table.
///
/// # Routes
///
/// - `GET /` - plain-text liveness message
/// - `GET /posts` - all posts, newest first
/// - `POST /posts` - create a post from `{title, body}`
/// - `/api/posts` - same as `/posts`
/// - `/health`, `/health/ready`, `/health/live` - probes
/// - `/metrics` - Prometheus metrics
/// - `/openapi.json` - API description
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    if matches!(std::env::args().nth(1).as_deref(), Some("healthcheck")) {
        return run_healthcheck().await;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match blog_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting blog-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    config.database.log_config();
    let db_pool = match create_pool(config.database.clone()).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {:#}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    let mysql_store = MySqlPostStore::new(db_pool);
    if config.app.run_migrations {
        mysql_store
            .run_migrations()
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Migration failed: {e}")))?;
    }

    let store: Arc<dyn PostStore> = Arc::new(mysql_store);
    let store_data = web::Data::from(store);

    let http_bind_address = config.bind_address();
    tracing::info!("Starting HTTP server at {}", http_bind_address);

    let cors_config = config.cors.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .wrap(MetricsMiddleware)
            .wrap(NormalizePath::trim())
            .wrap(cors_config.to_cors())
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(handlers::configure_routes)
    })
    .bind(&http_bind_address)?
    .workers(config.app.workers)
    .disable_signals()
    .run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    tokio::select! {
        result = server_task => {
            match result {
                Ok(Ok(())) => tracing::info!("HTTP server stopped"),
                Ok(Err(e)) => {
                    tracing::error!("HTTP server error: {}", e);
                    return Err(e);
                }
                Err(e) => {
                    tracing::error!("HTTP server task join error: {}", e);
                    return Err(io::Error::new(io::ErrorKind::Other, e.to_string()));
                }
            }
        }
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
        }
    }

    tracing::info!("Blog-service shutting down");
    Ok(())
}
