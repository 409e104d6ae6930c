use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn click<'a>(&'a self) -> ClickFixtures<'a> {
        ClickFixtures { ctx: self }
    }
}

pub struct ClickFixtures<'a> {
    ctx: &'a TestContext,
}

impl<'a> ClickFixtures<'a> {
    pub async fn insert_click(
        &self,
        link_id: i32,
    ) -> Result<entity::lynqr_click::Model, TestError> {
        self.insert_click_at(link_id, Utc::now().naive_utc()).await
    }

    pub async fn insert_click_at(
        &self,
        link_id: i32,
        created_at: NaiveDateTime,
    ) -> Result<entity::lynqr_click::Model, TestError> {
        Ok(
            entity::prelude::LynqrClick::insert(entity::lynqr_click::ActiveModel {
                link_id: ActiveValue::Set(link_id),
                created_at: ActiveValue::Set(created_at),
                ..Default::default()
            })
            .exec_with_returning(&self.ctx.db)
            .await?,
        )
    }

    /// Insert `count` clicks for a link, all timestamped now.
    pub async fn insert_clicks(&self, link_id: i32, count: usize) -> Result<(), TestError> {
        for _ in 0..count {
            self.insert_click(link_id).await?;
        }

        Ok(())
    }
}
