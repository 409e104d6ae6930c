use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No user ID is present in session")]
    Unauthenticated,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Login rejected for email {0:?}")]
    InvalidCredentials(String),
    #[error("Signup rejected, email {0:?} is already registered")]
    EmailTaken(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::Unauthenticated | Self::UserNotInDatabase(_) => {
                error_response(StatusCode::UNAUTHORIZED, "You need to sign in first")
            }
            Self::InvalidCredentials(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Invalid email or password")
            }
            Self::EmailTaken(_) => error_response(StatusCode::CONFLICT, "Email already registered"),
        }
    }
}
