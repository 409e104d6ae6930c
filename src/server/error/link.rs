use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum LinkError {
    /// The link does not exist or belongs to another user.
    #[error("Link ID {0} not found for caller")]
    NotFound(i32),
    #[error("Caller already has a link with URL {0:?}")]
    Duplicate(String),
}

impl IntoResponse for LinkError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Link not found"),
            Self::Duplicate(_) => error_response(
                StatusCode::CONFLICT,
                "You already have a link with this URL",
            ),
        }
    }
}
