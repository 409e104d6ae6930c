use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use lynqr::{
    model::link::LinkQueryParams,
    server::{controller::link::list_links, model::session::user::SessionUserId},
};

use super::*;

/// Expect 200 OK listing the caller's links
#[tokio::test]
async fn lists_links() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;
    let user = test.user().insert_user("ada@example.com").await?;
    test.link()
        .insert_link(user.id, "Blog", "https://ada.example/blog")
        .await?;
    test.link()
        .insert_inactive_link(user.id, "Draft", "https://ada.example/draft")
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = list_links(
        State(test.into_app_state()),
        test.session,
        Query(LinkQueryParams::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 OK with a search query
#[tokio::test]
async fn lists_links_with_query() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;
    let user = test.user().insert_user("ada@example.com").await?;
    test.link()
        .insert_link(user.id, "Blog", "https://ada.example/blog")
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = list_links(
        State(test.into_app_state()),
        test.session,
        Query(LinkQueryParams {
            q: Some("blog".to_string()),
        }),
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

    let result = list_links(
        State(test.into_app_state()),
        test.session,
        Query(LinkQueryParams::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
