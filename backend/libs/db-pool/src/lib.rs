//! Database connection pool management
//!
//! Provides unified MySQL pool creation and configuration for the blog services

pub mod env_utils;
mod metrics;

use env_utils::{parse_env_optional, parse_env_with_default};
use metrics::{record_connection_error, update_pool_metrics};

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, error, info};

/// Four-byte UTF-8, matching the `posts` table so any Unicode text fits
pub const DEFAULT_CHARSET: &str = "utf8mb4";

/// Database connection pool configuration
#[derive(Clone)]
pub struct DbConfig {
    /// Service name for metrics labeling
    pub service_name: String,
    /// Full MySQL connection URL; takes precedence over the individual parts
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    /// Connection character set. `None` keeps the charset named in
    /// `database_url`, or [`DEFAULT_CHARSET`] when connecting by parts.
    pub charset: Option<String>,
    /// Maximum number of connections
    pub max_connections: u32,
    /// Minimum number of connections
    pub min_connections: u32,
    /// Connection verification timeout (first round-trip to MySQL)
    pub connect_timeout_secs: u64,
    /// Connection acquisition timeout (get connection from pool)
    pub acquire_timeout_secs: u64,
    /// Connection idle timeout
    pub idle_timeout_secs: u64,
    /// Connection maximum lifetime
    pub max_lifetime_secs: u64,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("service_name", &self.service_name)
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[REDACTED]"),
            )
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("database", &self.database)
            .field("charset", &self.charset)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .field("idle_timeout_secs", &self.idle_timeout_secs)
            .field("max_lifetime_secs", &self.max_lifetime_secs)
            .finish()
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            service_name: String::from("unknown"),
            database_url: None,
            // "db" is the database service name in docker-compose
            host: String::from("db"),
            port: 3306,
            username: String::from("MYSQL_USER"),
            password: String::from("MYSQL_PASSWORD"),
            database: String::from("blog"),
            charset: None,
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 5,
            acquire_timeout_secs: 10,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
        }
    }
}

impl DbConfig {
    /// Create a new DbConfig from environment variables
    ///
    /// Unset variables fall back to [`DbConfig::default`]; a variable that is
    /// set but unparsable is an error.
    pub fn from_env(service_name: &str) -> Result<Self, String> {
        let defaults = Self::default();

        Ok(Self {
            service_name: service_name.to_string(),
            database_url: parse_env_optional("DATABASE_URL")?,
            host: parse_env_with_default("MYSQL_HOST", defaults.host)?,
            port: parse_env_with_default("MYSQL_PORT", defaults.port)?,
            username: parse_env_with_default("MYSQL_USER", defaults.username)?,
            password: parse_env_with_default("MYSQL_PASSWORD", defaults.password)?,
            database: parse_env_with_default("MYSQL_DATABASE", defaults.database)?,
            charset: parse_env_optional("MYSQL_CHARSET")?,
            max_connections: parse_env_with_default(
                "DB_MAX_CONNECTIONS",
                defaults.max_connections,
            )?,
            min_connections: parse_env_with_default(
                "DB_MIN_CONNECTIONS",
                defaults.min_connections,
            )?,
            connect_timeout_secs: parse_env_with_default(
                "DB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            acquire_timeout_secs: parse_env_with_default(
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout_secs,
            )?,
            idle_timeout_secs: parse_env_with_default(
                "DB_IDLE_TIMEOUT_SECS",
                defaults.idle_timeout_secs,
            )?,
            max_lifetime_secs: parse_env_with_default(
                "DB_MAX_LIFETIME_SECS",
                defaults.max_lifetime_secs,
            )?,
        })
    }

    /// Build sqlx connect options from the URL or the individual parts
    pub fn connect_options(&self) -> Result<MySqlConnectOptions, sqlx::Error> {
        let options = match &self.database_url {
            Some(url) => MySqlConnectOptions::from_str(url)?,
            None => MySqlConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.username)
                .password(&self.password)
                .database(&self.database)
                .charset(DEFAULT_CHARSET),
        };

        Ok(match &self.charset {
            Some(charset) => options.charset(charset),
            None => options,
        })
    }

    /// Log pool configuration details
    pub fn log_config(&self) {
        info!(
            "Database Pool Configuration: \
             target={}, charset={}, max_connections={}, min_connections={}, \
             connect_timeout={}s, acquire_timeout={}s, idle_timeout={}s, max_lifetime={}s",
            self.target_description(),
            self.charset.as_deref().unwrap_or("(from target)"),
            self.max_connections,
            self.min_connections,
            self.connect_timeout_secs,
            self.acquire_timeout_secs,
            self.idle_timeout_secs,
            self.max_lifetime_secs
        );
    }

    fn target_description(&self) -> String {
        match self.database_url {
            Some(_) => "DATABASE_URL".to_string(),
            None => format!("{}:{}/{}", self.host, self.port, self.database),
        }
    }
}

/// Create a MySQL connection pool with automatic metrics monitoring
pub async fn create_pool(config: DbConfig) -> Result<MySqlPool, sqlx::Error> {
    debug!(
        "Creating database pool: service={}, max={}, min={}, \
         acquire_timeout={}s, verify_timeout={}s, idle_timeout={}s",
        config.service_name,
        config.max_connections,
        config.min_connections,
        config.acquire_timeout_secs,
        config.connect_timeout_secs,
        config.idle_timeout_secs
    );

    let options = config.connect_options()?;

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .test_before_acquire(true)
        .connect_with(options)
        .await
        .map_err(|e| {
            record_connection_error(&config.service_name, &e);
            e
        })?;

    match tokio::time::timeout(
        Duration::from_secs(config.connect_timeout_secs),
        sqlx::query("SELECT 1").execute(&pool),
    )
    .await
    {
        Ok(Ok(_)) => {
            info!(
                service = %config.service_name,
                "Database pool created and verified successfully"
            );

            update_pool_metrics(&pool, &config.service_name);

            {
                let pool_clone = pool.clone();
                let service = config.service_name.clone();
                tokio::spawn(async move {
                    let mut interval = tokio::time::interval(Duration::from_secs(30));
                    loop {
                        interval.tick().await;
                        if pool_clone.is_closed() {
                            break;
                        }
                        update_pool_metrics(&pool_clone, &service);
                    }
                });
            }

            Ok(pool)
        }
        Ok(Err(e)) => {
            error!(
                service = %config.service_name,
                error = %e,
                "Database connection verification failed"
            );
            record_connection_error(&config.service_name, &e);
            Err(e)
        }
        Err(_) => {
            error!(
                service = %config.service_name,
                timeout_secs = config.connect_timeout_secs,
                "Database connection verification timeout"
            );
            let e = sqlx::Error::Io(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "Database verification timeout",
            ));
            record_connection_error(&config.service_name, &e);
            Err(e)
        }
    }
}
