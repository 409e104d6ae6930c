//! End-to-end tests through the full router and session layer.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use lynqr::server::router::routes;
use lynqr_test_utils::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::TestContextExt;

fn app(test: &TestContext) -> Router {
    routes()
        .with_state(test.into_app_state())
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

fn json_request(method: &str, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::empty()).unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Expect the icon catalog to list all 15 icons
#[tokio::test]
async fn icon_catalog_lists_all_icons() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(get_request("/api/icons", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(15));

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(get_request("/api/docs/openapi.json", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["paths"]["/api/links/{link_id}/analytics"].is_object());

    Ok(())
}

/// Expect guarded routes to answer 401 with an error body when no one is signed in
#[tokio::test]
async fn guarded_route_requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;

    let resp = app(&test)
        .oneshot(get_request("/api/links", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "You need to sign in first");

    Ok(())
}

/// Expect validation failures to list the rejected fields
#[tokio::test]
async fn signup_reports_field_errors() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request(
            "POST",
            "/api/auth/signup",
            None,
            json!({ "name": "Ada Lovelace", "email": "not-an-email", "password": "abc" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|field| field["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["email", "password"]);

    Ok(())
}

/// Expect a signed up user to log in, claim a username, add a link, and have a visitor's
/// click on it redirect and show up in the analytics
#[tokio::test]
async fn signup_to_click_through() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/signup",
            None,
            json!({ "name": "Ada Lovelace", "email": "ada@example.com", "password": "correct horse" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "correct horse" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
        .unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/user/username",
            Some(&cookie),
            json!({ "link_username": "ada" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/links",
            Some(&cookie),
            json!({ "title": "Code", "url": "https://github.com/ada", "icon": "github" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let link = body_json(resp).await;
    let link_id = link["id"].as_i64().unwrap();
    assert_eq!(link["icon_info"]["label"], "GitHub");

    let resp = app
        .clone()
        .oneshot(get_request("/ada", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let profile = body_json(resp).await;
    assert_eq!(profile["links"].as_array().map(Vec::len), Some(1));

    let resp = app
        .clone()
        .oneshot(get_request(&format!("/ada/{}", link_id), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        resp.headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("https://github.com/ada")
    );

    let resp = app
        .clone()
        .oneshot(get_request(
            &format!("/api/links/{}/analytics", link_id),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let analytics = body_json(resp).await;
    assert_eq!(analytics["total_clicks"], 1);
    assert_eq!(analytics["daily"].as_array().map(Vec::len), Some(1));

    Ok(())
}
