use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    Json,
};

use crate::{
    model::{api::ErrorDto, profile::ProfileDto},
    server::{error::Error, model::app::AppState, service::profile::ProfileService},
};

pub static PROFILE_TAG: &str = "profile";

/// Get the public profile for a username
///
/// Only active links are listed.
#[utoipa::path(
    get,
    path = "/api/profile/{username}",
    tag = PROFILE_TAG,
    params(("username" = String, Path, description = "Claimed username of the profile owner")),
    responses(
        (status = 200, description = "The public profile", body = ProfileDto),
        (status = 404, description = "Profile not found or unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let profile = ProfileService::new(&state.db)
        .resolve_profile(&username)
        .await?;

    Ok(Json(profile))
}

/// Public profile page at the root of the site, same body as the API route
#[utoipa::path(
    get,
    path = "/{username}",
    tag = PROFILE_TAG,
    params(("username" = String, Path, description = "Claimed username of the profile owner")),
    responses(
        (status = 200, description = "The public profile", body = ProfileDto),
        (status = 404, description = "Profile not found or unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile_page(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let profile = ProfileService::new(&state.db)
        .resolve_profile(&username)
        .await?;

    Ok(Json(profile))
}

/// Records a click on a profile link and redirects to its destination
///
/// # Responses
/// - 307 (Temporary Redirect): Redirect to the link's destination URL
/// - 404 (Not Found): Profile is missing or the link is inactive or owned by someone else
/// - 500 (Internal Server Error): The link could not be read
#[utoipa::path(
    get,
    path = "/{username}/{link_id}",
    tag = PROFILE_TAG,
    params(
        ("username" = String, Path, description = "Claimed username of the profile owner"),
        ("link_id" = i32, Path, description = "ID of the link to follow")
    ),
    responses(
        (status = 307, description = "Redirect to the link destination"),
        (status = 404, description = "Link not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn follow_link(
    State(state): State<AppState>,
    Path((username, link_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, Error> {
    let url = ProfileService::new(&state.db)
        .follow_link(&username, link_id)
        .await?;

    Ok(Redirect::temporary(&url))
}
