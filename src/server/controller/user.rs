use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        user::{ClaimUsernameDto, DashboardDto, UpdateProfileDto, UserDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{access::AccessGuard, user::UserService},
    },
};

pub static USER_TAG: &str = "user";

/// Claim the public username for the signed in user
///
/// A username can be claimed once per account.
#[utoipa::path(
    post,
    path = "/api/user/username",
    tag = USER_TAG,
    request_body = ClaimUsernameDto,
    responses(
        (status = 200, description = "Username claimed", body = UserDto),
        (status = 400, description = "Invalid or reserved username", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 409, description = "Username taken or already claimed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn claim_username(
    State(state): State<AppState>,
    session: Session,
    Json(claim): Json<ClaimUsernameDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AccessGuard::new(&state.db).authorize(&session).await?;

    let user = UserService::new(&state.db)
        .claim_username(user.id, &claim.link_username)
        .await?;

    Ok(Json(UserDto::from(user)))
}

/// Update name, bio, or image of the signed in user
#[utoipa::path(
    patch,
    path = "/api/user/profile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Invalid field", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(update): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AccessGuard::new(&state.db).authorize(&session).await?;

    let user = UserService::new(&state.db)
        .update_profile(user.id, update)
        .await?;

    Ok(Json(UserDto::from(user)))
}

/// Get link totals and the full link list of the signed in user
#[utoipa::path(
    get,
    path = "/api/user/dashboard",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Dashboard totals and links", body = DashboardDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = AccessGuard::new(&state.db).authorize(&session).await?;

    let dashboard = UserService::new(&state.db).dashboard(&user).await?;

    Ok(Json(dashboard))
}
