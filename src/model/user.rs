use serde::{Deserialize, Serialize};

use crate::model::link::LinkDto;

/// Private view of the signed in user
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub link_username: Option<String>,
    pub has_username: bool,
    pub image: Option<String>,
    pub bio: Option<String>,
}

impl From<entity::lynqr_user::Model> for UserDto {
    fn from(user: entity::lynqr_user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            link_username: user.link_username,
            has_username: user.has_username,
            image: user.image,
            bio: user.bio,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SignupDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClaimUsernameDto {
    pub link_username: String,
}

/// Partial profile update, omitted fields are left unchanged
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    /// An empty string clears the bio
    pub bio: Option<String>,
    /// An empty string clears the image
    pub image: Option<String>,
}

/// Owner dashboard: totals plus every link the owner has
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DashboardDto {
    pub link_username: Option<String>,
    pub total_links: u64,
    pub total_active_links: u64,
    pub total_clicks: u64,
    pub links: Vec<LinkDto>,
}
