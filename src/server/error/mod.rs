//! Error types for the intake server.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (authentication, configuration, application workflow, document storage). All errors
//! implement `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error
//! definitions with automatic `Display` and `Error` trait implementations.

/// Application intake and workflow errors
pub mod application;
/// Session identity errors
pub mod auth;
/// Startup configuration errors
pub mod config;
/// Retry classification of errors
pub mod retry;
/// Document storage errors
pub mod storage;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        application::ApplicationError, auth::AuthError, config::ConfigError,
        storage::StorageError,
    },
};

/// Main error type for the intake server.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (session user missing or unknown)
/// - Application workflow errors (validation, duplicates, illegal transitions, permissions)
/// - Document storage errors (file writes and deletes)
/// - External library errors (database, sessions)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session user missing or not found).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Application workflow error (validation, state machine, ownership).
    #[error(transparent)]
    ApplicationError(#[from] ApplicationError),
    /// Document storage error (file system write or delete failures).
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the server's code.
    ///
    /// This error should never occur in normal operation and indicates a programming error.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// I/O error outside of document storage (binding the listener, creating directories).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Most errors are treated as internal server errors (500) with logging, while workflow and
/// authentication errors have their own response mappings.
///
/// # Returns
/// - 400 Bad Request - Malformed requests or invalid number formats
/// - 401 Unauthorized / 404 Not Found - Missing session user or unknown records
/// - 403 Forbidden - Administrator-only actions attempted by citizens
/// - 409 Conflict - Duplicate active applications or illegal status transitions
/// - 422 Unprocessable Entity - Field validation failures
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ApplicationError(err) => err.into_response(),
            Self::StorageError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details or sensitive information.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
