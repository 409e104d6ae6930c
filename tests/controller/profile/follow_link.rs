use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use lynqr::server::controller::profile::follow_link;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect 307 redirect to the destination and one recorded click
#[tokio::test]
async fn redirects_and_records_click() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;
    let user = test
        .user()
        .insert_user_with_username("ada@example.com", "ada")
        .await?;
    let link = test
        .link()
        .insert_link(user.id, "Blog", "https://ada.example/blog")
        .await?;

    let result = follow_link(
        State(test.into_app_state()),
        Path(("ada".to_string(), link.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        resp.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
        Some("https://ada.example/blog")
    );

    let clicks = entity::prelude::LynqrClick::find().count(&test.db).await?;
    assert_eq!(clicks, 1);

    Ok(())
}

/// Expect 404 Not Found and no click for an inactive link
#[tokio::test]
async fn not_found_for_inactive_link() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;
    let user = test
        .user()
        .insert_user_with_username("ada@example.com", "ada")
        .await?;
    let link = test
        .link()
        .insert_inactive_link(user.id, "Draft", "https://ada.example/draft")
        .await?;

    let result = follow_link(
        State(test.into_app_state()),
        Path(("ada".to_string(), link.id)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let clicks = entity::prelude::LynqrClick::find().count(&test.db).await?;
    assert_eq!(clicks, 0);

    Ok(())
}

/// Expect 404 Not Found when the link belongs to a different profile
#[tokio::test]
async fn not_found_for_link_of_other_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;
    test.user()
        .insert_user_with_username("ada@example.com", "ada")
        .await?;
    let other = test
        .user()
        .insert_user_with_username("grace@example.com", "grace")
        .await?;
    let link = test
        .link()
        .insert_link(other.id, "Blog", "https://grace.example/blog")
        .await?;

    let result = follow_link(
        State(test.into_app_state()),
        Path(("ada".to_string(), link.id)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
