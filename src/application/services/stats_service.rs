//! Click recording and statistics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::clock::Clock;
use crate::domain::entities::{Click, Link, LinkState, NewClick};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;

/// Link metadata with its full click log.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link: Link,
    pub state: LinkState,
    pub total: u64,
    pub clicks: Vec<Click>,
}

/// Link metadata with its click total, used for listings.
#[derive(Debug, Clone)]
pub struct LinkSummary {
    pub link: Link,
    pub state: LinkState,
    pub total: u64,
}

/// Service for the click log and derived statistics.
///
/// Totals are always computed from the recorded clicks; nothing is cached.
pub struct StatsService<L: LinkRepository, C: ClickRepository> {
    link_repository: Arc<L>,
    click_repository: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<L: LinkRepository, C: ClickRepository> StatsService<L, C> {
    pub fn new(link_repository: Arc<L>, click_repository: Arc<C>, clock: Arc<dyn Clock>) -> Self {
        Self {
            link_repository,
            click_repository,
            clock,
        }
    }

    /// Appends a click and returns the updated total for its link.
    pub async fn record_click(&self, new_click: NewClick) -> Result<u64, AppError> {
        let total = self.click_repository.record_click(new_click).await?;
        metrics::counter!("clicks_recorded_total").increment(1);
        Ok(total)
    }

    /// Retrieves a link together with every click recorded for it.
    ///
    /// Works for expired links too; expiry only stops redirects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn link_stats(&self, code: &str) -> Result<LinkStats, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Statistics not found", json!({ "shortcode": code })))?;

        let clicks = self.click_repository.clicks_for(code).await?;

        Ok(LinkStats {
            state: link.state_at(self.clock.now()),
            total: clicks.len() as u64,
            link,
            clicks,
        })
    }

    /// Lists links with their click totals.
    pub async fn all_stats(&self, offset: u64, limit: u64) -> Result<Vec<LinkSummary>, AppError> {
        let links = self.link_repository.list(offset, limit).await?;
        let now = self.clock.now();

        let mut summaries = Vec::with_capacity(links.len());
        for link in links {
            let total = self.click_repository.count_for(&link.code).await?;
            summaries.push(LinkSummary {
                state: link.state_at(now),
                total,
                link,
            });
        }

        Ok(summaries)
    }

    /// Counts every stored link. Used for pagination metadata.
    pub async fn count_all_links(&self) -> Result<u64, AppError> {
        self.link_repository.count().await
    }
}
