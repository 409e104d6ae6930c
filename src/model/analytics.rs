use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DailyClicksDto {
    /// UTC calendar day
    pub date: NaiveDate,
    pub clicks: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LinkAnalyticsDto {
    pub link_id: i32,
    pub title: String,
    pub total_clicks: u64,
    /// Ascending by date, only days with at least one click
    pub daily: Vec<DailyClicksDto>,
}
