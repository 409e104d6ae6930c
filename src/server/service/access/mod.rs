//! Access control for protected operations.
//!
//! Every protected request resolves its caller through [`AccessGuard::authorize`], which asks a
//! [`SessionResolver`] for the user ID and confirms the user still exists. Nothing is cached
//! between requests. Once a caller is known, [`check_ownership`] decides whether a loaded
//! entity belongs to them.


use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{
        db::{LinkModel, UserModel},
        session::user::SessionUserId,
    },
};

/// Source of the caller's identity for a single request.
///
/// Implemented for [`tower_sessions::Session`] in production. Tests and other front ends can
/// provide their own resolver without a session store.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// Returns the user ID bound to the request, if any.
    async fn resolve_user_id(&self) -> Result<Option<i32>, Error>;

    /// Discards the caller's identity after it was found to point at a missing user.
    async fn invalidate(&self) -> Result<(), Error> {
        Ok(())
    }
}

#[async_trait]
impl SessionResolver for Session {
    async fn resolve_user_id(&self) -> Result<Option<i32>, Error> {
        SessionUserId::get(self).await
    }

    async fn invalidate(&self) -> Result<(), Error> {
        self.clear().await;

        Ok(())
    }
}

/// Resolves callers of protected operations to their user record.
pub struct AccessGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccessGuard<'a> {
    /// Creates a new instance of [`AccessGuard`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the caller and loads their user record.
    ///
    /// # Arguments
    /// - `resolver` - Identity source for the current request
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The caller's user record
    /// - `Err(Error::AuthError(AuthError::Unauthenticated))` - No user ID could be resolved
    /// - `Err(Error::AuthError(AuthError::UserNotInDatabase))` - The resolved user no longer
    ///   exists; the resolver is invalidated first
    /// - `Err(Error)` - Session or database failure
    pub async fn authorize<R>(&self, resolver: &R) -> Result<UserModel, Error>
    where
        R: SessionResolver + ?Sized,
    {
        let Some(user_id) = resolver.resolve_user_id().await? else {
            return Err(AuthError::Unauthenticated.into());
        };

        let Some(user) = UserRepository::new(self.db).get(user_id).await? else {
            resolver.invalidate().await?;

            tracing::debug!(
                user_id = %user_id,
                "Session cleared for user with active session but not found in database"
            );

            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}

/// An entity that belongs to exactly one user.
pub trait OwnedEntity {
    fn owner_id(&self) -> i32;
}

impl OwnedEntity for LinkModel {
    fn owner_id(&self) -> i32 {
        self.user_id
    }
}

/// Outcome of loading an entity on behalf of a caller.
#[derive(Debug, PartialEq, Eq)]
pub enum Ownership<T> {
    Authorized(T),
    NotFound,
    Forbidden,
}

impl<T> Ownership<T> {
    /// Collapses the outcome into a result.
    ///
    /// `NotFound` and `Forbidden` both produce `not_found()` so callers cannot learn whether
    /// another user's entity exists.
    pub fn into_result<F>(self, not_found: F) -> Result<T, Error>
    where
        F: FnOnce() -> Error,
    {
        match self {
            Self::Authorized(entity) => Ok(entity),
            Self::NotFound | Self::Forbidden => Err(not_found()),
        }
    }
}

/// Decides whether `user_id` may act on a loaded entity.
pub fn check_ownership<T: OwnedEntity>(entity: Option<T>, user_id: i32) -> Ownership<T> {
    match entity {
        None => Ownership::NotFound,
        Some(entity) if entity.owner_id() == user_id => Ownership::Authorized(entity),
        Some(_) => Ownership::Forbidden,
    }
}
