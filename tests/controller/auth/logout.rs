use axum::{http::StatusCode, response::IntoResponse};
use lynqr::server::{controller::auth::logout, model::session::user::SessionUserId};

use super::*;

/// Expect 307 temporary redirect after logout with a user ID in session
#[tokio::test]
async fn redirects_and_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_none());

    Ok(())
}

/// Expect 307 temporary redirect after logout even without session data
///
/// Clearing an empty session errors, so the endpoint only clears when a user ID is present.
#[tokio::test]
async fn redirects_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
