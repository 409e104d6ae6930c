//! Error types for the Lynqr server application.
//!
//! Each request-facing domain (authentication, validation, links, users, public profiles) has
//! its own `thiserror` enum with an `IntoResponse` implementation that decides the HTTP status
//! and message for that domain. The top-level [`Error`] aggregates them together with the
//! infrastructure errors from the database and session layers. Configuration errors only occur
//! at startup and are reported by `main` directly.

pub mod auth;
pub mod config;
pub mod link;
pub mod profile;
pub mod user;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, link::LinkError, profile::ProfileError, user::UserError,
        validation::ValidationError,
    },
};

/// Main error type for the Lynqr server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Authentication errors (no session, bad credentials, duplicate email)
/// - Validation errors (per-field messages for rejected request bodies)
/// - Link, user, and profile errors (not found, conflicts)
/// - External library errors (database, sessions, session store, password hashing, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication error (missing session, invalid credentials).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// One or more request fields failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Link error (not found or not owned, duplicate destination URL).
    #[error(transparent)]
    LinkError(#[from] LinkError),
    /// User error (username conflicts).
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Public profile resolution error.
    #[error(transparent)]
    ProfileError(#[from] ProfileError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Password hashing or hash parsing failed.
    #[error("Password hash error: {0}")]
    PasswordHashError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// I/O error (binding or serving the HTTP listener).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors delegate to their own `IntoResponse` implementations; everything else is
/// treated as an internal server error.
///
/// # Returns
/// - 400 Bad Request - Validation failures
/// - 401 Unauthorized - No valid session, or invalid credentials
/// - 404 Not Found - Missing or foreign links, unresolved profiles
/// - 409 Conflict - Duplicate email, username, or link URL
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::LinkError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::ProfileError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Returns true when a database error is a unique constraint violation.
///
/// Used by services to map a lost race on a unique index to the same conflict error the
/// application-level pre-check would have produced.
pub fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    )
}

/// Builds a JSON error response with the given status and message.
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
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

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
