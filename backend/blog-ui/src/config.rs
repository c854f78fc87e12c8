/// Configuration for the blog web client
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Host the page server binds to
    pub host: String,
    /// Port the page server binds to
    pub port: u16,
    /// Base URL of blog-service
    pub api_base_url: String,
}

impl UiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let port = match std::env::var("BLOG_UI_PORT") {
            Ok(val) => val
                .parse()
                .map_err(|e| format!("Failed to parse BLOG_UI_PORT='{}': {}", val, e))?,
            Err(_) => 3000,
        };

        Ok(UiConfig {
            host: std::env::var("BLOG_UI_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            api_base_url: std::env::var("BLOG_API_URL")
                .unwrap_or_else(|_| "http://localhost:5050".to_string()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
