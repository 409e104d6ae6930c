use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use lynqr::{model::user::SignupDto, server::controller::auth::signup};

use super::*;

/// Expect 201 Created for a valid signup
#[tokio::test]
async fn creates_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = signup(
        State(test.into_app_state()),
        Json(signup_dto("ada@example.com")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 409 Conflict when the email is already registered, ignoring case
#[tokio::test]
async fn conflict_for_registered_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    test.user().insert_user("ada@example.com").await?;

    let result = signup(
        State(test.into_app_state()),
        Json(signup_dto("ADA@example.com")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 400 Bad Request for a short password
#[tokio::test]
async fn bad_request_for_short_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = signup(
        State(test.into_app_state()),
        Json(SignupDto {
            password: "abc".to_string(),
            ..signup_dto("ada@example.com")
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
