use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use lynqr::server::{controller::link::get_link, model::session::user::SessionUserId};

use super::*;

/// Expect 200 OK for one of the caller's links
#[tokio::test]
async fn returns_owned_link() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;
    let user = test.user().insert_user("ada@example.com").await?;
    let link = test
        .link()
        .insert_link(user.id, "Blog", "https://ada.example/blog")
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_link(State(test.into_app_state()), test.session, Path(link.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found for a link owned by someone else
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

    let result = get_link(State(test.into_app_state()), test.session, Path(link.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
