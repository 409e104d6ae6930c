use serde::{Deserialize, Serialize};

use crate::model::icon::IconDto;

/// Public profile of a user with a claimed username
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProfileDto {
    pub name: String,
    pub link_username: String,
    pub image: Option<String>,
    pub bio: Option<String>,
    /// Active links only, newest first
    pub links: Vec<PublicLinkDto>,
}

/// A link as shown to anonymous visitors
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PublicLinkDto {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub icon_info: IconDto,
    pub description: Option<String>,
}

impl From<entity::lynqr_link::Model> for PublicLinkDto {
    fn from(link: entity::lynqr_link::Model) -> Self {
        Self {
            id: link.id,
            icon_info: IconDto::resolve(link.icon.as_deref()),
            title: link.title,
            url: link.url,
            description: link.description,
        }
    }
}
