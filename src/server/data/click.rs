use std::collections::HashMap;

use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct ClickRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClickRepository<'a, C> {
    /// Creates a new instance of [`ClickRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a click on a link at the current time
    pub async fn create(&self, link_id: i32) -> Result<entity::lynqr_click::Model, DbErr> {
        let click = entity::lynqr_click::ActiveModel {
            link_id: ActiveValue::Set(link_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        click.insert(self.db).await
    }

    pub async fn count_by_link_id(&self, link_id: i32) -> Result<u64, DbErr> {
        entity::prelude::LynqrClick::find()
            .filter(entity::lynqr_click::Column::LinkId.eq(link_id))
            .count(self.db)
            .await
    }

    /// Counts clicks for several links in one grouped query
    ///
    /// Links without clicks are absent from the returned map.
    pub async fn count_by_link_ids(&self, link_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if link_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts: Vec<(i32, i64)> = entity::prelude::LynqrClick::find()
            .select_only()
            .column(entity::lynqr_click::Column::LinkId)
            .column_as(entity::lynqr_click::Column::Id.count(), "clicks")
            .filter(entity::lynqr_click::Column::LinkId.is_in(link_ids.iter().copied()))
            .group_by(entity::lynqr_click::Column::LinkId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(link_id, clicks)| (link_id, clicks.max(0) as u64))
            .collect())
    }

    /// Gets the timestamp of every click on a link, oldest first
    pub async fn get_timestamps_by_link_id(
        &self,
        link_id: i32,
    ) -> Result<Vec<NaiveDateTime>, DbErr> {
        entity::prelude::LynqrClick::find()
            .select_only()
            .column(entity::lynqr_click::Column::CreatedAt)
            .filter(entity::lynqr_click::Column::LinkId.eq(link_id))
            .order_by_asc(entity::lynqr_click::Column::CreatedAt)
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn delete_by_link_id(&self, link_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LynqrClick::delete_many()
            .filter(entity::lynqr_click::Column::LinkId.eq(link_id))
            .exec(self.db)
            .await
    }
}
