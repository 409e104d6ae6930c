use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::icon::IconDto;

/// A link as seen by its owner
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LinkDto {
    pub id: i32,
    pub title: String,
    pub url: String,
    /// The icon tag as stored, if any
    pub icon: Option<String>,
    /// The catalog entry the stored tag resolves to
    pub icon_info: IconDto,
    pub description: Option<String>,
    pub is_active: bool,
    pub clicks: u64,
    pub created_at: NaiveDateTime,
}

impl LinkDto {
    pub fn from_model(link: entity::lynqr_link::Model, clicks: u64) -> Self {
        let icon_info = IconDto::resolve(link.icon.as_deref());

        Self {
            id: link.id,
            title: link.title,
            url: link.url,
            icon: link.icon,
            icon_info,
            description: link.description,
            is_active: link.is_active,
            clicks,
            created_at: link.created_at,
        }
    }
}

/// Body for creating or replacing a link
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LinkFormDto {
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LinkStatusDto {
    pub is_active: bool,
}

/// Query parameters for the owner's link list
#[derive(Clone, Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LinkQueryParams {
    /// Case-insensitive substring matched against title and URL
    pub q: Option<String>,
}
