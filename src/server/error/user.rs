use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("Username {0:?} is held by another user")]
    UsernameTaken(String),
    #[error("User ID {0} has already claimed a username")]
    UsernameAlreadyClaimed(i32),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UsernameTaken(_) => error_response(StatusCode::CONFLICT, "Username already taken"),
            Self::UsernameAlreadyClaimed(_) => {
                error_response(StatusCode::CONFLICT, "Username already claimed")
            }
        }
    }
}
