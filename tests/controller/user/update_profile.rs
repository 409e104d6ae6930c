use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use lynqr::{
    model::user::UpdateProfileDto,
    server::{controller::user::update_profile, model::session::user::SessionUserId},
};

use super::*;

/// Expect 200 OK when updating the bio
#[tokio::test]
async fn updates_bio() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user = test.user().insert_user("ada@example.com").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = update_profile(
        State(test.into_app_state()),
        test.session,
        Json(UpdateProfileDto {
            bio: Some("Analytical engines".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 Bad Request for a bio over 200 characters
#[tokio::test]
async fn bad_request_for_long_bio() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user = test.user().insert_user("ada@example.com").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = update_profile(
        State(test.into_app_state()),
        test.session,
        Json(UpdateProfileDto {
            bio: Some("a".repeat(201)),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
