use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when request fields fail validation
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ValidationErrorDto {
    /// Summary of the failure
    pub error: String,
    /// One entry per rejected field
    pub fields: Vec<FieldErrorDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// A plain confirmation message for mutations without a resource body
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    pub message: String,
}
