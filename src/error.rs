use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("Error {action}: {source}")]
    Write {
        action: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// The body could not be read as JSON (or as a form) at all. Field
    /// values are never checked here.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid username or password")]
    Unauthorized,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Tag a storage failure with the write it interrupted, e.g. "creating user".
    /// Other variants pass through unchanged.
    pub fn during(self, action: &'static str) -> Self {
        match self {
            AppError::Database(source) => AppError::Write { action, source },
            other => other,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

// Convert AppError to an HTTP response
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Database(_) | AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
            AppError::Write { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "success": false, "message": self.to_string() }),
            ),
            AppError::InvalidBody(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "message": self.to_string() }),
            ),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "success": false, "message": self.to_string() }),
            ),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
