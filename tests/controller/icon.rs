use axum::{http::StatusCode, response::IntoResponse};
use lynqr::server::controller::icon::list_icons;

/// Expect 200 OK for the icon catalog
#[tokio::test]
async fn lists_icons() {
    let resp = list_icons().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
}
