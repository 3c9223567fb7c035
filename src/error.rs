//! Error types and the JSON error controller

use std::any::Any;

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Internal server error: {0}")]
    Internal(String),

    /// Error raised with an explicit HTTP status and message
    #[error("{message}")]
    Http { status: StatusCode, message: String },
}

impl AppError {
    pub fn http(status: StatusCode, message: impl Into<String>) -> Self {
        AppError::Http {
            status,
            message: message.into(),
        }
    }

    /// Status and message sent to the client
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Http { status, message } => (*status, message.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(_) | AppError::Session(_) | AppError::Internal(_) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                (status, canonical_reason(status))
            }
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = Json(ApiError {
            code: status.as_u16(),
            message,
        });

        (status, body).into_response()
    }
}

/// Fallback for routes that match nothing
pub async fn fallback(uri: Uri) -> AppError {
    tracing::debug!(%uri, "No route matched");
    AppError::http(StatusCode::NOT_FOUND, canonical_reason(StatusCode::NOT_FOUND))
}

/// Converts a handler panic into the JSON error payload
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(%detail, "Handler panicked");

    AppError::Internal(detail.to_string()).into_response()
}

fn canonical_reason(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Unknown").to_string()
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
