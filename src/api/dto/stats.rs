//! DTOs for detailed link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::application::services::LinkStats;
use crate::domain::entities::LinkState;

/// Statistics for a single short link with its full click log.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub shortcode: String,
    pub long_url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub status: LinkState,
    pub events: Vec<ClickInfo>,
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            shortcode: stats.link.code,
            long_url: stats.link.long_url,
            clicks: stats.total,
            created_at: stats.link.created_at,
            expires_at: stats.link.expires_at,
            status: stats.state,
            events: stats.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
