//! Public profile resolution and click-through.
//!
//! These operations serve anonymous visitors: they never consult a session and only ever expose
//! active links.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::profile::{ProfileDto, PublicLinkDto},
    server::{
        data::{click::ClickRepository, link::LinkRepository, user::UserRepository},
        error::{link::LinkError, profile::ProfileError, Error},
        model::db::{LinkModel, UserModel},
    },
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    /// Creates a new instance of [`ProfileService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a username to its public profile.
    ///
    /// # Returns
    /// - `Ok(ProfileDto)` - Public fields and active links, newest first; the link list may be
    ///   empty
    /// - `Err(Error::ProfileError(ProfileError::NotFound))` - Nobody holds the username
    /// - `Err(Error::ProfileError(ProfileError::Unavailable))` - The holder has not completed
    ///   setup
    pub async fn resolve_profile(&self, username: &str) -> Result<ProfileDto, Error> {
        let (user, link_username) = self.find_profile_owner(username).await?;

        let links = LinkRepository::new(self.db)
            .get_active_by_user_id(user.id)
            .await?;

        Ok(ProfileDto {
            name: user.name,
            link_username,
            image: user.image,
            bio: user.bio,
            links: links.into_iter().map(PublicLinkDto::from).collect(),
        })
    }

    /// Records one click on a link.
    pub async fn record_click(&self, link_id: i32) -> Result<(), Error> {
        ClickRepository::new(self.db).create(link_id).await?;

        Ok(())
    }

    /// Resolves a profile link for a visitor and records the click.
    ///
    /// The link must be active and owned by the holder of `username`. Recording the click is
    /// best-effort: a failure is logged and the destination is still returned.
    ///
    /// # Returns
    /// - `Ok(String)` - Destination URL to redirect the visitor to
    /// - `Err(Error::ProfileError)` - The username does not resolve to a profile
    /// - `Err(Error::LinkError(LinkError::NotFound))` - No such active link on this profile
    pub async fn follow_link(&self, username: &str, link_id: i32) -> Result<String, Error> {
        let link = self.resolve_link(username, link_id).await?;

        if let Err(err) = self.record_click(link.id).await {
            tracing::warn!(link_id = %link.id, "Failed to record click: {}", err);
        }

        Ok(link.url)
    }

    async fn resolve_link(&self, username: &str, link_id: i32) -> Result<LinkModel, Error> {
        let (user, _) = self.find_profile_owner(username).await?;

        LinkRepository::new(self.db)
            .get_active_owned(link_id, user.id)
            .await?
            .ok_or_else(|| LinkError::NotFound(link_id).into())
    }

    async fn find_profile_owner(&self, username: &str) -> Result<(UserModel, String), Error> {
        let username = username.trim();

        let Some(user) = UserRepository::new(self.db)
            .get_by_username(username)
            .await?
        else {
            return Err(ProfileError::NotFound(username.to_string()).into());
        };

        match (user.has_username, user.link_username.clone()) {
            (true, Some(link_username)) => Ok((user, link_username)),
            _ => Err(ProfileError::Unavailable(username.to_string()).into()),
        }
    }
}
