/// Configuration management for Blog Service
///
/// Configuration is read once from the environment at startup and handed to
/// the components that need it; nothing reads the environment afterwards.
use actix_cors::Cors;
use db_pool::env_utils::parse_env_with_default;
use db_pool::DbConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database connection and pool settings
    pub database: DbConfig,
}

/// Application settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// Number of HTTP worker threads
    pub workers: usize,
    /// Apply the bundled migrations before serving
    pub run_migrations: bool,
}

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, `*` for any
    pub allowed_origins: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                host: std::env::var("BLOG_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_with_default("PORT", 5050)?,
                workers: parse_env_with_default("BLOG_SERVICE_WORKERS", 4)?,
                run_migrations: parse_env_with_default("RUN_MIGRATIONS", false)?,
            },
            cors: CorsConfig {
                allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string()),
            },
            database: DbConfig::from_env("blog-service")?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

impl CorsConfig {
    /// Build the actix CORS middleware for this configuration
    pub fn to_cors(&self) -> Cors {
        let mut cors = Cors::default();
        for origin in self.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin.is_empty() {
                continue;
            }
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors.allow_any_method().allow_any_header().max_age(3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_app_env() {
        for key in [
            "APP_ENV",
            "BLOG_SERVICE_HOST",
            "PORT",
            "BLOG_SERVICE_WORKERS",
            "RUN_MIGRATIONS",
            "CORS_ALLOWED_ORIGINS",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn defaults_listen_on_5050_with_open_cors() {
        clear_app_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.app.port, 5050);
        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.env, "development");
        assert!(!config.app.run_migrations);
        assert_eq!(config.cors.allowed_origins, "*");
        assert_eq!(config.bind_address(), "0.0.0.0:5050");
        assert_eq!(config.database.service_name, "blog-service");
    }

    #[test]
    #[serial]
    fn port_and_migrations_come_from_env() {
        clear_app_env();
        std::env::set_var("PORT", "8088");
        std::env::set_var("RUN_MIGRATIONS", "true");

        let config = Config::from_env().unwrap();
        assert_eq!(config.app.port, 8088);
        assert!(config.app.run_migrations);

        clear_app_env();
    }

    #[test]
    #[serial]
    fn invalid_database_port_is_rejected_like_service_port() {
        clear_app_env();
        std::env::set_var("MYSQL_PORT", "abc");

        let err = Config::from_env().unwrap_err();
        assert!(err.contains("MYSQL_PORT"));

        std::env::remove_var("MYSQL_PORT");
    }

    #[test]
    #[serial]
    fn invalid_port_is_rejected() {
        clear_app_env();
        std::env::set_var("PORT", "fifty");

        let err = Config::from_env().unwrap_err();
        assert!(err.contains("PORT"));

        clear_app_env();
    }
}
