//! Application error type and its HTTP mapping.
//!
//! Every request-level failure is terminal for that request and is reported to
//! the caller as a plain-text body. Nothing is retried.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors produced while answering a report request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The year path segment is not an integer.
    #[error("Invalid year parameter")]
    BadRequest,

    /// The year parsed but the table has no rows for it.
    #[error("No data found for year {0}")]
    NotFound(i64),

    /// The backing database file is absent or could not be opened.
    #[error("Database not available")]
    StoreUnavailable,

    /// A query failed against an open store.
    #[error("Database error: {0}")]
    Store(String),

    /// A template file is missing, unreadable, or a fragment failed to render.
    #[error("Error loading template: {0}")]
    Template(String),

    /// Query results contradict each other.
    #[error("Internal error: {0}")]
    InternalInconsistency(String),
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable
            | AppError::Store(_)
            | AppError::Template(_)
            | AppError::InternalInconsistency(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Store(e.to_string())
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{message}");
        } else {
            tracing::debug!(status = status.as_u16(), "{message}");
        }

        (status, message).into_response()
    }
}
