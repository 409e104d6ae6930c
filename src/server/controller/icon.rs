use axum::{response::IntoResponse, Json};

use crate::model::icon::{IconDto, ICON_CATALOG};

pub static ICON_TAG: &str = "icon";

/// List the icons a link can use
#[utoipa::path(
    get,
    path = "/api/icons",
    tag = ICON_TAG,
    responses(
        (status = 200, description = "The icon catalog", body = Vec<IconDto>)
    ),
)]
pub async fn list_icons() -> impl IntoResponse {
    let icons: Vec<IconDto> = ICON_CATALOG.iter().map(IconDto::from).collect();

    Json(icons)
}
