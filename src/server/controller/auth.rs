use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        user::{LoginDto, SignupDto, UserDto},
    },
    server::{
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::{access::AccessGuard, auth::AuthService},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Create a new account
///
/// The account is not signed in; the client logs in separately afterwards.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid name, email, or password", body = ValidationErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(signup): Json<SignupDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db).signup(signup).await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// Sign in with email and password
///
/// On success the session ID is rotated before the user ID is stored in it.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = UserDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(login): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db).login(login).await?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    tracing::debug!(user_id = %user.id, "User logged in");

    Ok(Json(UserDto::from(user)))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Logged out (or never logged in), redirect to the login page
/// - 500 (Internal Server Error): There was an issue reading the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the login page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Clearing a session that was never stored fails, so only clear when signed in
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/login"))
}

/// Get the signed in user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The signed in user", body = UserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = AccessGuard::new(&state.db).authorize(&session).await?;

    Ok(Json(UserDto::from(user)))
}
