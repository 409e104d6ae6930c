use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

/// Validated, normalised columns of a link as written by its owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkFields {
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub description: Option<String>,
}

pub struct LinkRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LinkRepository<'a, C> {
    /// Creates a new instance of [`LinkRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active link owned by `user_id`
    pub async fn create(
        &self,
        user_id: i32,
        fields: LinkFields,
    ) -> Result<entity::lynqr_link::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let link = entity::lynqr_link::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(fields.title),
            url: ActiveValue::Set(fields.url),
            icon: ActiveValue::Set(fields.icon),
            description: ActiveValue::Set(fields.description),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        link.insert(self.db).await
    }

    pub async fn get(&self, link_id: i32) -> Result<Option<entity::lynqr_link::Model>, DbErr> {
        entity::prelude::LynqrLink::find_by_id(link_id)
            .one(self.db)
            .await
    }

    /// Gets every link owned by the user, newest first
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::lynqr_link::Model>, DbErr> {
        entity::prelude::LynqrLink::find()
            .filter(entity::lynqr_link::Column::UserId.eq(user_id))
            .order_by_desc(entity::lynqr_link::Column::CreatedAt)
            .order_by_desc(entity::lynqr_link::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the user's active links, newest first
    pub async fn get_active_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::lynqr_link::Model>, DbErr> {
        entity::prelude::LynqrLink::find()
            .filter(entity::lynqr_link::Column::UserId.eq(user_id))
            .filter(entity::lynqr_link::Column::IsActive.eq(true))
            .order_by_desc(entity::lynqr_link::Column::CreatedAt)
            .order_by_desc(entity::lynqr_link::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a link only if it is active and owned by `user_id`
    pub async fn get_active_owned(
        &self,
        link_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::lynqr_link::Model>, DbErr> {
        entity::prelude::LynqrLink::find_by_id(link_id)
            .filter(entity::lynqr_link::Column::UserId.eq(user_id))
            .filter(entity::lynqr_link::Column::IsActive.eq(true))
            .one(self.db)
            .await
    }

    /// Finds the user's link pointing at `url`, if any
    pub async fn get_by_user_and_url(
        &self,
        user_id: i32,
        url: &str,
    ) -> Result<Option<entity::lynqr_link::Model>, DbErr> {
        entity::prelude::LynqrLink::find()
            .filter(entity::lynqr_link::Column::UserId.eq(user_id))
            .filter(entity::lynqr_link::Column::Url.eq(url))
            .one(self.db)
            .await
    }

    /// Replaces the editable columns of a link
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated link
    /// - `Ok(None)` - No link with that ID
    pub async fn update(
        &self,
        link_id: i32,
        fields: LinkFields,
    ) -> Result<Option<entity::lynqr_link::Model>, DbErr> {
        let Some(link) = entity::prelude::LynqrLink::find_by_id(link_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut link_am = link.into_active_model();
        link_am.title = ActiveValue::Set(fields.title);
        link_am.url = ActiveValue::Set(fields.url);
        link_am.icon = ActiveValue::Set(fields.icon);
        link_am.description = ActiveValue::Set(fields.description);
        link_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let link = link_am.update(self.db).await?;

        Ok(Some(link))
    }

    pub async fn set_active(
        &self,
        link_id: i32,
        is_active: bool,
    ) -> Result<Option<entity::lynqr_link::Model>, DbErr> {
        let Some(link) = entity::prelude::LynqrLink::find_by_id(link_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut link_am = link.into_active_model();
        link_am.is_active = ActiveValue::Set(is_active);
        link_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let link = link_am.update(self.db).await?;

        Ok(Some(link))
    }

    /// Deletes a link
    ///
    /// Returns OK regardless of link existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, link_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LynqrLink::delete_by_id(link_id)
            .exec(self.db)
            .await
    }
}
