//! Field-level validation errors.
//!
//! Validation collects every failing field before returning, so a caller gets the whole list
//! of problems in one 400 response instead of fixing them one at a time.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{FieldErrorDto, ValidationErrorDto};

#[derive(Error, Debug, Default)]
#[error("Request validation failed for {} field(s)", .fields.len())]
pub struct ValidationError {
    pub fields: Vec<FieldErrorDto>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an error for a single field.
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.push(field, message);
        err
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.fields.push(FieldErrorDto {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Records an error unless `value` has between `min` and `max` characters inclusive.
    pub fn check_length(&mut self, field: &str, value: &str, min: usize, max: usize) {
        let len = value.chars().count();

        if len < min {
            self.push(field, format!("Must be at least {} characters", min));
        } else if len > max {
            self.push(field, format!("Must be at most {} characters", max));
        }
    }

    /// Records an error if `value` has more than `max` characters.
    pub fn check_max_length(&mut self, field: &str, value: &str, max: usize) {
        self.check_length(field, value, 0, max);
    }

    /// Returns true if any field has failed.
    pub fn has_errors(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Converts the collected errors into a result, `Ok` when nothing failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() {
            Err(self)
        } else {
            Ok(())
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!(fields = ?self.fields, "{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorDto {
                error: "Invalid request".to_string(),
                fields: self.fields,
            }),
        )
            .into_response()
    }
}
