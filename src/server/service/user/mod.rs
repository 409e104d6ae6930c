//! User service layer.
//!
//! Username claiming, profile edits, and the owner dashboard. Callers pass the user ID
//! resolved by the access guard; nothing here reads the session.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::user::{DashboardDto, UpdateProfileDto},
    server::{
        data::user::{ProfileChanges, UserRepository},
        error::{
            auth::AuthError, is_unique_violation, user::UserError, validation::ValidationError,
            Error,
        },
        model::db::UserModel,
        service::link::LinkService,
    },
};

/// Handles that collide with application routes.
pub static RESERVED_USERNAMES: [&str; 8] = [
    "api",
    "login",
    "signup",
    "logout",
    "hub",
    "profile",
    "qr-code",
    "analytics",
];

/// Service for managing user account operations.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Claims a public username for the user.
    ///
    /// The candidate is trimmed, checked for shape, then checked against other users. The
    /// username and `has_username` are written in one statement that only applies while the
    /// user has no username, and the unique column catches a concurrent claim of the same
    /// handle by another user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the caller
    /// - `username` - Requested username, untrimmed
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The user with the username set
    /// - `Err(Error::ValidationError)` - The username has an invalid shape or is reserved
    /// - `Err(Error::UserError(UserError::UsernameAlreadyClaimed))` - The user already has one
    /// - `Err(Error::UserError(UserError::UsernameTaken))` - Another user holds it
    /// - `Err(Error::AuthError(AuthError::UserNotInDatabase))` - The user does not exist
    pub async fn claim_username(&self, user_id: i32, username: &str) -> Result<UserModel, Error> {
        let username = validate_username(username)?;
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.get(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if user.has_username {
            return Err(UserError::UsernameAlreadyClaimed(user_id).into());
        }

        if user_repo.get_by_username(&username).await?.is_some() {
            return Err(UserError::UsernameTaken(username).into());
        }

        let claimed = user_repo
            .claim_username(user_id, &username)
            .await
            .map_err(|err| username_taken_or(err, &username))?;
        if !claimed {
            return Err(UserError::UsernameAlreadyClaimed(user_id).into());
        }

        tracing::info!(user_id = %user_id, username = %username, "Username claimed");

        user_repo
            .get(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }

    /// Updates display name, bio, and image.
    ///
    /// Omitted fields stay as they are. An empty bio or image clears the stored value.
    pub async fn update_profile(
        &self,
        user_id: i32,
        update: UpdateProfileDto,
    ) -> Result<UserModel, Error> {
        let changes = validate_profile(update)?;

        UserRepository::new(self.db)
            .update_profile(user_id, changes)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }

    /// Builds the owner dashboard: totals plus the full link list.
    pub async fn dashboard(&self, user: &UserModel) -> Result<DashboardDto, Error> {
        let links = LinkService::new(self.db).list_links(user.id, None).await?;

        let total_links = links.len() as u64;
        let total_active_links = links.iter().filter(|link| link.is_active).count() as u64;
        let total_clicks = links.iter().map(|link| link.clicks).sum();

        Ok(DashboardDto {
            link_username: user.link_username.clone(),
            total_links,
            total_active_links,
            total_clicks,
            links,
        })
    }
}

/// Trims and checks a requested username.
///
/// Usernames are 3 to 20 ASCII letters, digits, `_`, `-`, or `.` and may not be one of
/// [`RESERVED_USERNAMES`].
/// Maps a failed claim, turning a unique violation on `link_username` into a taken username.
fn username_taken_or(err: DbErr, username: &str) -> Error {
    if is_unique_violation(&err) {
        UserError::UsernameTaken(username.to_string()).into()
    } else {
        err.into()
    }
}

pub fn validate_username(username: &str) -> Result<String, ValidationError> {
    let username = username.trim();

    let mut errors = ValidationError::new();
    errors.check_length("link_username", username, 3, 20);
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        errors.push(
            "link_username",
            "May only contain letters, numbers, '_', '-', and '.'",
        );
    }
    if RESERVED_USERNAMES.contains(&username.to_ascii_lowercase().as_str()) {
        errors.push("link_username", "This username is reserved");
    }
    errors.into_result()?;

    Ok(username.to_string())
}

fn validate_profile(update: UpdateProfileDto) -> Result<ProfileChanges, ValidationError> {
    let mut errors = ValidationError::new();

    let name = update.name.map(|name| name.trim().to_string());
    if let Some(name) = &name {
        errors.check_length("name", name, 3, 50);
    }

    let bio = update.bio.map(|bio| non_empty(&bio));
    if let Some(Some(bio)) = &bio {
        errors.check_max_length("bio", bio, 200);
    }

    let image = update.image.map(|image| non_empty(&image));
    if let Some(Some(image)) = &image {
        errors.check_max_length("image", image, 500);
    }

    errors.into_result()?;

    Ok(ProfileChanges { name, bio, image })
}

/// Trims a value, mapping an empty result to `None`.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();

    (!value.is_empty()).then(|| value.to_string())
}
