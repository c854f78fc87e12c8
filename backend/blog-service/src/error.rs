/// Error types for Blog Service
///
/// Store failures are logged with their cause and answered with a generic
/// message; the cause never reaches the client.
use crate::db::StoreError;
use crate::models::ErrorResponse;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for blog-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// A post store operation failed
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },

    /// Request body could not be decoded
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn store(message: &'static str, source: StoreError) -> Self {
        AppError::Store { message, source }
    }

    /// Message safe to hand to clients
    pub fn public_message(&self) -> String {
        match self {
            AppError::Store { message, .. } => (*message).to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Store { .. } | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Store { message, source } => {
                tracing::error!(error = %source, "{}", message);
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
            }
            AppError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "rejected request body");
            }
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            message: self.public_message(),
        })
    }
}
