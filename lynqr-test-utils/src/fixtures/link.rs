use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn link<'a>(&'a self) -> LinkFixtures<'a> {
        LinkFixtures { ctx: self }
    }
}

pub struct LinkFixtures<'a> {
    ctx: &'a TestContext,
}

impl<'a> LinkFixtures<'a> {
    /// Insert an active link with no icon or description.
    pub async fn insert_link(
        &self,
        user_id: i32,
        title: &str,
        url: &str,
    ) -> Result<entity::lynqr_link::Model, TestError> {
        self.insert(user_id, title, url, true, Utc::now().naive_utc())
            .await
    }

    /// Insert a link that is hidden from the public profile.
    pub async fn insert_inactive_link(
        &self,
        user_id: i32,
        title: &str,
        url: &str,
    ) -> Result<entity::lynqr_link::Model, TestError> {
        self.insert(user_id, title, url, false, Utc::now().naive_utc())
            .await
    }

    /// Insert an active link with an explicit creation time, for ordering tests.
    pub async fn insert_link_created_at(
        &self,
        user_id: i32,
        url: &str,
        created_at: NaiveDateTime,
    ) -> Result<entity::lynqr_link::Model, TestError> {
        self.insert(user_id, "Test Link", url, true, created_at).await
    }

    async fn insert(
        &self,
        user_id: i32,
        title: &str,
        url: &str,
        is_active: bool,
        created_at: NaiveDateTime,
    ) -> Result<entity::lynqr_link::Model, TestError> {
        Ok(
            entity::prelude::LynqrLink::insert(entity::lynqr_link::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                title: ActiveValue::Set(title.to_string()),
                url: ActiveValue::Set(url.to_string()),
                icon: ActiveValue::Set(None),
                description: ActiveValue::Set(None),
                is_active: ActiveValue::Set(is_active),
                created_at: ActiveValue::Set(created_at),
                updated_at: ActiveValue::Set(created_at),
                ..Default::default()
            })
            .exec_with_returning(&self.ctx.db)
            .await?,
        )
    }
}
