use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        analytics::LinkAnalyticsDto,
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        link::{LinkDto, LinkFormDto, LinkQueryParams, LinkStatusDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{access::AccessGuard, analytics::AnalyticsService, link::LinkService},
    },
};

pub static LINK_TAG: &str = "link";

/// List the signed in user's links, newest first
///
/// Includes inactive links. The optional `q` parameter filters on title and destination URL.
#[utoipa::path(
    get,
    path = "/api/links",
    tag = LINK_TAG,
    params(LinkQueryParams),
    responses(
        (status = 200, description = "The caller's links", body = Vec<LinkDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_links(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LinkQueryParams>,
) -> Result<impl IntoResponse, Error> {
    let user = AccessGuard::new(&state.db).authorize(&session).await?;

    let links = LinkService::new(&state.db)
        .list_links(user.id, params.q.as_deref())
        .await?;

    Ok(Json(links))
}

/// Add a link to the signed in user's profile
#[utoipa::path(
    post,
    path = "/api/links",
    tag = LINK_TAG,
    request_body = LinkFormDto,
    responses(
        (status = 201, description = "Link created", body = LinkDto),
        (status = 400, description = "Invalid link fields", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 409, description = "A link with this URL already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_link(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LinkFormDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AccessGuard::new(&state.db).authorize(&session).await?;

    let link = LinkService::new(&state.db).create_link(user.id, form).await?;

    Ok((StatusCode::CREATED, Json(link)))
}

/// Get one of the signed in user's links
#[utoipa::path(
    get,
    path = "/api/links/{link_id}",
    tag = LINK_TAG,
    params(("link_id" = i32, Path, description = "ID of the link")),
    responses(
        (status = 200, description = "The link", body = LinkDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Link not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_link(
    State(state): State<AppState>,
    session: Session,
    Path(link_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = AccessGuard::new(&state.db).authorize(&session).await?;

    let link = LinkService::new(&state.db).get_link(user.id, link_id).await?;

    Ok(Json(link))
}

/// Replace the fields of one of the signed in user's links
///
/// Leaving the icon empty keeps the icon already stored.
#[utoipa::path(
    put,
    path = "/api/links/{link_id}",
    tag = LINK_TAG,
    params(("link_id" = i32, Path, description = "ID of the link")),
    request_body = LinkFormDto,
    responses(
        (status = 200, description = "Link updated", body = LinkDto),
        (status = 400, description = "Invalid link fields", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Link not found", body = ErrorDto),
        (status = 409, description = "Another link already uses this URL", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_link(
    State(state): State<AppState>,
    session: Session,
    Path(link_id): Path<i32>,
    Json(form): Json<LinkFormDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AccessGuard::new(&state.db).authorize(&session).await?;

    let link = LinkService::new(&state.db)
        .update_link(user.id, link_id, form)
        .await?;

    Ok(Json(link))
}

/// Delete one of the signed in user's links along with its clicks
#[utoipa::path(
    delete,
    path = "/api/links/{link_id}",
    tag = LINK_TAG,
    params(("link_id" = i32, Path, description = "ID of the link")),
    responses(
        (status = 200, description = "Link deleted", body = MessageDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Link not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_link(
    State(state): State<AppState>,
    session: Session,
    Path(link_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = AccessGuard::new(&state.db).authorize(&session).await?;

    LinkService::new(&state.db)
        .delete_link(user.id, link_id)
        .await?;

    Ok(Json(MessageDto {
        message: "Link deleted".to_string(),
    }))
}

/// Show or hide one of the signed in user's links on their public profile
#[utoipa::path(
    patch,
    path = "/api/links/{link_id}/status",
    tag = LINK_TAG,
    params(("link_id" = i32, Path, description = "ID of the link")),
    request_body = LinkStatusDto,
    responses(
        (status = 200, description = "Link status updated", body = LinkDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Link not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_link_status(
    State(state): State<AppState>,
    session: Session,
    Path(link_id): Path<i32>,
    Json(status): Json<LinkStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AccessGuard::new(&state.db).authorize(&session).await?;

    let link = LinkService::new(&state.db)
        .set_link_active(user.id, link_id, status.is_active)
        .await?;

    Ok(Json(link))
}

/// Get total and per-day click counts for one of the signed in user's links
#[utoipa::path(
    get,
    path = "/api/links/{link_id}/analytics",
    tag = LINK_TAG,
    params(("link_id" = i32, Path, description = "ID of the link")),
    responses(
        (status = 200, description = "Click analytics for the link", body = LinkAnalyticsDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Link not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_link_analytics(
    State(state): State<AppState>,
    session: Session,
    Path(link_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = AccessGuard::new(&state.db).authorize(&session).await?;

    let analytics = AnalyticsService::new(&state.db)
        .link_analytics(user.id, link_id)
        .await?;

    Ok(Json(analytics))
}
