//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion
//! logic for transforming errors into HTTP responses. The `AppError` enum
//! serves as the top-level error type raised by services and controllers and
//! implements `IntoResponse`, so every endpoint maps failures through one
//! place. All responses use the uniform envelope
//! `{"error":{"statusCode":<n>,"message":<s>}}`.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{dto::api::ErrorDto, error::config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all error conditions that can occur in the application and
/// provides automatic conversion to HTTP responses. Infrastructure errors
/// use `#[from]` for automatic conversion; business-rule violations are
/// raised explicitly with a message variant carrying the intended status.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 409 Conflict when the underlying failure is a unique
    /// constraint violation (a race that slipped past the service-level
    /// checks), otherwise 500 Internal Server Error with details logged
    /// server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Password hashing or verification error from bcrypt.
    ///
    /// Results in 500 Internal Server Error; the raw error is never shown
    /// to the client.
    #[error(transparent)]
    BcryptErr(#[from] bcrypt::BcryptError),

    /// Socket or filesystem error during server startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness or consistency rule violation.
    ///
    /// Results in 409 Conflict with the provided error message (duplicate
    /// name/operationId, capacity violations, table still referenced).
    #[error("{0}")]
    Conflict(String),

    /// Authentication failure.
    ///
    /// Results in 401 Unauthorized for bad credentials or missing/invalid
    /// bearer tokens.
    #[error("{0}")]
    Unauthorized(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Returns true when a database error is a unique index violation.
///
/// SeaORM does not expose a typed variant for this, so the check matches the
/// driver messages: SQLite reports "UNIQUE constraint failed", PostgreSQL
/// "duplicate key value violates unique constraint".
fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    let msg = err.to_string();
    msg.contains("UNIQUE constraint failed") || msg.contains("duplicate key value")
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and the
/// uniform error envelope. Internal errors are logged with full details but
/// return a generic message to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 401 Unauthorized - For `Unauthorized`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict` and database unique violations
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::DbErr(err) if is_unique_violation(&err) => {
                tracing::warn!("unique constraint reached the database: {err}");
                (
                    StatusCode::CONFLICT,
                    "Duplicate value for a unique field".to_string(),
                )
            }
            err => {
                tracing::error!("internal error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(ErrorDto::new(status.as_u16(), message))).into_response()
    }
}
