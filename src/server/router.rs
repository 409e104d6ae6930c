//! HTTP routing and OpenAPI documentation configuration.
//!
//! Registers every Lynqr endpoint together with its utoipa annotation, collects the
//! annotations into one OpenAPI document, and serves Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// The public profile routes live at the site root (`/{username}` and
/// `/{username}/{link_id}`); the static `/api/...` routes take priority over them when
/// matching, so a username can never shadow an API path.
///
/// # Returns
/// An Axum `Router<AppState>` ready for `with_state` and the session layer.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Lynqr", description = "Lynqr API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Account and session API routes"),
        (name = controller::user::USER_TAG, description = "Signed in user API routes"),
        (name = controller::link::LINK_TAG, description = "Link management API routes"),
        (name = controller::icon::ICON_TAG, description = "Icon catalog API routes"),
        (name = controller::profile::PROFILE_TAG, description = "Public profile routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::signup))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::user::claim_username))
        .routes(routes!(controller::user::update_profile))
        .routes(routes!(controller::user::get_dashboard))
        .routes(routes!(
            controller::link::list_links,
            controller::link::create_link
        ))
        .routes(routes!(
            controller::link::get_link,
            controller::link::update_link,
            controller::link::delete_link
        ))
        .routes(routes!(controller::link::set_link_status))
        .routes(routes!(controller::link::get_link_analytics))
        .routes(routes!(controller::icon::list_icons))
        .routes(routes!(controller::profile::get_profile))
        .routes(routes!(controller::profile::get_profile_page))
        .routes(routes!(controller::profile::follow_link))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
