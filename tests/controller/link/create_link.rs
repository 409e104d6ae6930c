use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use lynqr::server::{controller::link::create_link, model::session::user::SessionUserId};

use super::*;

/// Expect 201 Created for a valid link
#[tokio::test]
async fn creates_link() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;
    let user = test.user().insert_user("ada@example.com").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = create_link(
        State(test.into_app_state()),
        test.session,
        Json(link_form("Code", "https://github.com/ada")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 409 Conflict when the caller already has a link to the URL
#[tokio::test]
async fn conflict_for_duplicate_url() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;
    let user = test.user().insert_user("ada@example.com").await?;
    test.link()
        .insert_link(user.id, "Code", "https://github.com/ada")
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = create_link(
        State(test.into_app_state()),
        test.session,
        Json(link_form("Code again", "https://github.com/ada")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 201 Created when another user already has a link to the same URL
#[tokio::test]
async fn allows_same_url_for_different_users() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;
    let other = test.user().insert_user("grace@example.com").await?;
    test.link()
        .insert_link(other.id, "Code", "https://github.com/ada")
        .await?;
    let user = test.user().insert_user("ada@example.com").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = create_link(
        State(test.into_app_state()),
        test.session,
        Json(link_form("Code", "https://github.com/ada")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 Bad Request for a one character title
#[tokio::test]
async fn bad_request_for_short_title() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;
    let user = test.user().insert_user("ada@example.com").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = create_link(
        State(test.into_app_state()),
        test.session,
        Json(link_form("C", "https://github.com/ada")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
