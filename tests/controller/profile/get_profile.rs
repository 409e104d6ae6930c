use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use lynqr::server::controller::profile::{get_profile, get_profile_page};

use super::*;

/// Expect 200 OK for a claimed username
#[tokio::test]
async fn returns_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;
    let user = test
        .user()
        .insert_user_with_username("ada@example.com", "ada")
        .await?;
    test.link()
        .insert_link(user.id, "Blog", "https://ada.example/blog")
        .await?;

    let result = get_profile(State(test.into_app_state()), Path("ada".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found for a username nobody holds
#[tokio::test]
async fn not_found_for_unknown_username() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;

    let result = get_profile(State(test.into_app_state()), Path("nobody".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the root profile page to answer like the API route
#[tokio::test]
async fn page_returns_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;
    test.user()
        .insert_user_with_username("ada@example.com", "ada")
        .await?;

    let result = get_profile_page(State(test.into_app_state()), Path("ada".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
