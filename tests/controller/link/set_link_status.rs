use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use lynqr::{
    model::link::LinkStatusDto,
    server::{controller::link::set_link_status, model::session::user::SessionUserId},
};

use super::*;

/// Expect 200 OK when hiding one of the caller's links
#[tokio::test]
async fn hides_link() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;
    let user = test.user().insert_user("ada@example.com").await?;
    let link = test
        .link()
        .insert_link(user.id, "Blog", "https://ada.example/blog")
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = set_link_status(
        State(test.into_app_state()),
        test.session,
        Path(link.id),
        Json(LinkStatusDto { is_active: false }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 Unauthorized without a user in session
#[tokio::test]
async fn unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;
    let user = test.user().insert_user("ada@example.com").await?;
    let link = test
        .link()
        .insert_link(user.id, "Blog", "https://ada.example/blog")
        .await?;

    let result = set_link_status(
        State(test.into_app_state()),
        test.session,
        Path(link.id),
        Json(LinkStatusDto { is_active: false }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
