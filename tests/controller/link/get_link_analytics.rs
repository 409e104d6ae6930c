use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use lynqr::server::{
    controller::link::get_link_analytics, model::session::user::SessionUserId,
};

use super::*;

/// Expect 200 OK with clicks recorded on the caller's link
#[tokio::test]
async fn returns_analytics() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;
    let user = test.user().insert_user("ada@example.com").await?;
    let link = test
        .link()
        .insert_link(user.id, "Blog", "https://ada.example/blog")
        .await?;
    test.click().insert_clicks(link.id, 4).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result =
        get_link_analytics(State(test.into_app_state()), test.session, Path(link.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found for analytics of someone else's link
#[tokio::test]
async fn not_found_for_foreign_link() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;
    let other = test.user().insert_user("grace@example.com").await?;
    let link = test
        .link()
        .insert_link(other.id, "Blog", "https://grace.example/blog")
        .await?;
    let user = test.user().insert_user("ada@example.com").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result =
        get_link_analytics(State(test.into_app_state()), test.session, Path(link.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
