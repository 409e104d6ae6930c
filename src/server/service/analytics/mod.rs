//! Click analytics derived from the click log.
//!
//! Counts are always computed from click rows; there is no stored counter to drift.


use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::DatabaseConnection;

use crate::{
    model::analytics::{DailyClicksDto, LinkAnalyticsDto},
    server::{
        data::{click::ClickRepository, link::LinkRepository},
        error::{link::LinkError, Error},
        service::link::LinkService,
    },
};

pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    /// Creates a new instance of [`AnalyticsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts the clicks recorded for a link.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of clicks, possibly zero
    /// - `Err(Error::LinkError(LinkError::NotFound))` - The link does not exist, including after
    ///   it was deleted
    pub async fn click_count(&self, link_id: i32) -> Result<u64, Error> {
        if LinkRepository::new(self.db).get(link_id).await?.is_none() {
            return Err(LinkError::NotFound(link_id).into());
        }

        Ok(ClickRepository::new(self.db)
            .count_by_link_id(link_id)
            .await?)
    }

    /// Builds the per-day click series for one of the owner's links.
    pub async fn link_analytics(
        &self,
        owner_id: i32,
        link_id: i32,
    ) -> Result<LinkAnalyticsDto, Error> {
        let link = LinkService::new(self.db)
            .load_owned(owner_id, link_id)
            .await?;

        let timestamps = ClickRepository::new(self.db)
            .get_timestamps_by_link_id(link.id)
            .await?;

        Ok(LinkAnalyticsDto {
            link_id: link.id,
            title: link.title,
            total_clicks: timestamps.len() as u64,
            daily: group_by_day(&timestamps),
        })
    }
}

/// Groups UTC click timestamps by calendar day, ascending.
///
/// Days without clicks are omitted. The counts always sum to `timestamps.len()`.
pub fn group_by_day(timestamps: &[NaiveDateTime]) -> Vec<DailyClicksDto> {
    let mut days: BTreeMap<NaiveDate, u64> = BTreeMap::new();

    for timestamp in timestamps {
        *days.entry(timestamp.date()).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, clicks)| DailyClicksDto { date, clicks })
        .collect()
}
