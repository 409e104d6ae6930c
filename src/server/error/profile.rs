use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Terminal states of public profile resolution.
///
/// Both render as 404 but carry different messages so the front end can tell an unknown
/// handle apart from an account that never finished setup.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("No user holds username {0:?}")]
    NotFound(String),
    #[error("User holding username {0:?} has not completed setup")]
    Unavailable(String),
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Profile not found"),
            Self::Unavailable(_) => error_response(
                StatusCode::NOT_FOUND,
                "This profile hasn't completed setup yet",
            ),
        }
    }
}
