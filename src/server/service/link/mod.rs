//! Link lifecycle: create, edit, toggle, and delete links on behalf of their owner.
//!
//! Every operation that names an existing link loads it through [`LinkService::load_owned`],
//! so a link owned by someone else is indistinguishable from a missing one.


use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::link::{LinkDto, LinkFormDto},
    server::{
        data::{
            click::ClickRepository,
            link::{LinkFields, LinkRepository},
        },
        error::{
            is_unique_violation, link::LinkError, validation::ValidationError, Error,
        },
        model::db::LinkModel,
        service::{access::check_ownership, user::non_empty},
    },
};

pub struct LinkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LinkService<'a> {
    /// Creates a new instance of [`LinkService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a link only if `owner_id` owns it.
    ///
    /// # Returns
    /// - `Ok(LinkModel)` - The owned link
    /// - `Err(Error::LinkError(LinkError::NotFound))` - Missing or owned by another user
    pub async fn load_owned(&self, owner_id: i32, link_id: i32) -> Result<LinkModel, Error> {
        let link = LinkRepository::new(self.db).get(link_id).await?;

        check_ownership(link, owner_id).into_result(|| LinkError::NotFound(link_id).into())
    }

    /// Lists all of the owner's links, newest first, with click counts.
    ///
    /// # Arguments
    /// - `owner_id` - ID of the caller
    /// - `query` - Optional case-insensitive filter over title and URL
    pub async fn list_links(
        &self,
        owner_id: i32,
        query: Option<&str>,
    ) -> Result<Vec<LinkDto>, Error> {
        let links = LinkRepository::new(self.db)
            .get_many_by_user_id(owner_id)
            .await?;

        let links: Vec<LinkModel> = match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(query) => {
                let query = query.to_lowercase();

                links
                    .into_iter()
                    .filter(|link| {
                        link.title.to_lowercase().contains(&query)
                            || link.url.to_lowercase().contains(&query)
                    })
                    .collect()
            }
            None => links,
        };

        let ids: Vec<i32> = links.iter().map(|link| link.id).collect();
        let counts = ClickRepository::new(self.db)
            .count_by_link_ids(&ids)
            .await?;

        Ok(links
            .into_iter()
            .map(|link| {
                let clicks = counts.get(&link.id).copied().unwrap_or(0);
                LinkDto::from_model(link, clicks)
            })
            .collect())
    }

    pub async fn get_link(&self, owner_id: i32, link_id: i32) -> Result<LinkDto, Error> {
        let link = self.load_owned(owner_id, link_id).await?;
        let clicks = ClickRepository::new(self.db)
            .count_by_link_id(link.id)
            .await?;

        Ok(LinkDto::from_model(link, clicks))
    }

    /// Creates a new active link.
    ///
    /// # Returns
    /// - `Ok(LinkDto)` - The created link with zero clicks
    /// - `Err(Error::ValidationError)` - A field was rejected
    /// - `Err(Error::LinkError(LinkError::Duplicate))` - The owner already links to this URL
    pub async fn create_link(&self, owner_id: i32, form: LinkFormDto) -> Result<LinkDto, Error> {
        let fields = validate_link_form(form)?;
        let link_repo = LinkRepository::new(self.db);

        if link_repo
            .get_by_user_and_url(owner_id, &fields.url)
            .await?
            .is_some()
        {
            return Err(LinkError::Duplicate(fields.url).into());
        }

        let url = fields.url.clone();
        let link = link_repo
            .create(owner_id, fields)
            .await
            .map_err(|err| duplicate_or(err, url))?;

        tracing::debug!(user_id = %owner_id, link_id = %link.id, "Created link");

        Ok(LinkDto::from_model(link, 0))
    }

    /// Replaces a link's title, URL, icon, and description.
    ///
    /// An empty icon keeps the icon already stored.
    pub async fn update_link(
        &self,
        owner_id: i32,
        link_id: i32,
        form: LinkFormDto,
    ) -> Result<LinkDto, Error> {
        let mut fields = validate_link_form(form)?;
        let existing = self.load_owned(owner_id, link_id).await?;
        let link_repo = LinkRepository::new(self.db);

        if let Some(other) = link_repo
            .get_by_user_and_url(owner_id, &fields.url)
            .await?
        {
            if other.id != link_id {
                return Err(LinkError::Duplicate(fields.url).into());
            }
        }

        if fields.icon.is_none() {
            fields.icon = existing.icon;
        }

        let url = fields.url.clone();
        let link = link_repo
            .update(link_id, fields)
            .await
            .map_err(|err| duplicate_or(err, url))?
            .ok_or(LinkError::NotFound(link_id))?;

        let clicks = ClickRepository::new(self.db)
            .count_by_link_id(link.id)
            .await?;

        Ok(LinkDto::from_model(link, clicks))
    }

    /// Shows or hides a link on the public profile.
    pub async fn set_link_active(
        &self,
        owner_id: i32,
        link_id: i32,
        is_active: bool,
    ) -> Result<LinkDto, Error> {
        self.load_owned(owner_id, link_id).await?;

        let link = LinkRepository::new(self.db)
            .set_active(link_id, is_active)
            .await?
            .ok_or(LinkError::NotFound(link_id))?;

        let clicks = ClickRepository::new(self.db)
            .count_by_link_id(link.id)
            .await?;

        Ok(LinkDto::from_model(link, clicks))
    }

    /// Deletes a link and its clicks in one transaction.
    pub async fn delete_link(&self, owner_id: i32, link_id: i32) -> Result<(), Error> {
        self.load_owned(owner_id, link_id).await?;

        let txn = self.db.begin().await?;

        let removed_clicks = ClickRepository::new(&txn)
            .delete_by_link_id(link_id)
            .await?;
        let result = LinkRepository::new(&txn).delete(link_id).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;

            return Err(LinkError::NotFound(link_id).into());
        }

        txn.commit().await?;

        tracing::debug!(
            user_id = %owner_id,
            link_id = %link_id,
            clicks = %removed_clicks.rows_affected,
            "Deleted link"
        );

        Ok(())
    }
}

/// Trims and checks a link form.
///
/// Title 2 to 50 characters, URL 3 to 200, description at most 200. Empty icon and
/// description become `None`.
/// Maps a failed link write, turning a lost race on the `(user_id, url)` index into the same
/// duplicate error the pre-check reports.
fn duplicate_or(err: DbErr, url: String) -> Error {
    if is_unique_violation(&err) {
        LinkError::Duplicate(url).into()
    } else {
        err.into()
    }
}

pub fn validate_link_form(form: LinkFormDto) -> Result<LinkFields, ValidationError> {
    let title = form.title.trim().to_string();
    let url = form.url.trim().to_string();
    let icon = form.icon.as_deref().and_then(non_empty);
    let description = form.description.as_deref().and_then(non_empty);

    let mut errors = ValidationError::new();
    errors.check_length("title", &title, 2, 50);
    errors.check_length("url", &url, 3, 200);
    if let Some(description) = &description {
        errors.check_max_length("description", description, 200);
    }
    errors.into_result()?;

    Ok(LinkFields {
        title,
        url,
        icon,
        description,
    })
}
