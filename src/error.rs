//! Error types for the library server

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Machine-readable error codes returned to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    NotFound,
    DuplicateKey,
    ConnectionError,
    DatabaseError,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

/// Error response body
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Short human-readable label
    pub error: String,
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateKey(_) => StatusCode::CONFLICT,
            AppError::Connection(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::DuplicateKey(_) => ErrorCode::DuplicateKey,
            AppError::Connection(_) => ErrorCode::ConnectionError,
            AppError::Database(_) => ErrorCode::DatabaseError,
        }
    }
}

/// Classify driver errors. Constraint violations are the caller's fault and
/// keep a stable client-facing meaning; everything else is opaque.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_) => AppError::Connection(err),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::DuplicateKey("A row with the same key already exists".to_string())
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => AppError::Validation(
                "Referenced book or reader does not exist, or the row is still referenced by borrow records"
                    .to_string(),
            ),
            sqlx::Error::Database(db) if db.is_check_violation() => {
                AppError::Validation(format!("Constraint violated: {}", db.constraint().unwrap_or("check")))
            }
            _ => AppError::Database(err),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (label, message) = match &self {
            AppError::Validation(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                ("Invalid request", msg.clone())
            }
            AppError::NotFound(msg) => ("Not found", msg.clone()),
            AppError::DuplicateKey(msg) => ("Duplicate key", msg.clone()),
            AppError::Connection(e) => {
                tracing::error!("Database connection failed: {:?}", e);
                ("Database connection failed", "Could not reach the database".to_string())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                ("Database error", "The database rejected the statement".to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: label.to_string(),
            code: self.code(),
            message,
        });

        (self.status(), body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
