//! DTOs for the statistics listing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::LinkSummary;
use crate::domain::entities::LinkState;

/// Paginated list of link statistics.
#[derive(Debug, Serialize)]
pub struct StatsListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<LinkStatsItem>,
}

/// Click total and metadata for a single link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStatsItem {
    pub shortcode: String,
    pub long_url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub status: LinkState,
}

impl From<LinkSummary> for LinkStatsItem {
    fn from(summary: LinkSummary) -> Self {
        Self {
            shortcode: summary.link.code,
            long_url: summary.link.long_url,
            clicks: summary.total,
            created_at: summary.link.created_at,
            expires_at: summary.link.expires_at,
            status: summary.state,
        }
    }
}

/// Pagination metadata for responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u64,
}

impl PaginationMeta {
    pub fn new(page: u32, page_size: u32, total_items: u64) -> Self {
        Self {
            page,
            page_size,
            total_items,
            total_pages: total_items.div_ceil(u64::from(page_size)),
        }
    }
}
