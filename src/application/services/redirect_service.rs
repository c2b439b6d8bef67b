//! Short code resolution with click recording.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::application::services::StatsService;
use crate::domain::click_event::ClickEvent;
use crate::domain::clock::Clock;
use crate::domain::entities::Link;
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;

/// Resolves short codes to their targets.
///
/// Exactly one click is recorded per successful resolution, and it is
/// recorded before the caller receives the target.
pub struct RedirectService<L: LinkRepository, C: ClickRepository> {
    link_repository: Arc<L>,
    stats_service: Arc<StatsService<L, C>>,
    clock: Arc<dyn Clock>,
}

impl<L: LinkRepository, C: ClickRepository> RedirectService<L, C> {
    pub fn new(
        link_repository: Arc<L>,
        stats_service: Arc<StatsService<L, C>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            link_repository,
            stats_service,
            clock,
        }
    }

    /// Looks up `code`, checks expiry, and records the click.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no link has this code
    /// - [`AppError::Expired`] once the link's expiry time is reached; no
    ///   click is recorded in that case
    pub async fn resolve(&self, code: &str, event: ClickEvent) -> Result<Link, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "shortcode": code })))?;

        let now = self.clock.now();
        if link.is_expired_at(now) {
            debug!(code, expires_at = %link.expires_at, "Short link expired");
            return Err(AppError::expired(
                "Short link has expired",
                json!({ "shortcode": code, "expires_at": link.expires_at }),
            ));
        }

        let total = self
            .stats_service
            .record_click(event.into_new_click(code, now))
            .await?;

        metrics::counter!("redirects_total").increment(1);
        debug!(code, total, "Click recorded");

        Ok(link)
    }
}
