//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, LinkSettings, RedirectService, StatsService};
use crate::config::Config;
use crate::domain::clock::{Clock, SystemClock};
use crate::infrastructure::persistence::{InMemoryClickRepository, InMemoryLinkRepository};

pub type AppLinkService = LinkService<InMemoryLinkRepository>;
pub type AppStatsService = StatsService<InMemoryLinkRepository, InMemoryClickRepository>;
pub type AppRedirectService = RedirectService<InMemoryLinkRepository, InMemoryClickRepository>;

/// Services shared by all handlers. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    pub redirect_service: Arc<AppRedirectService>,
    pub stats_service: Arc<AppStatsService>,
    /// Prefix for returned short URLs.
    pub base_url: String,
}

impl AppState {
    /// Wires services over empty in-memory stores.
    ///
    /// All services share one clock, so tests can move time for the whole
    /// application at once.
    pub fn new(base_url: impl Into<String>, settings: LinkSettings, clock: Arc<dyn Clock>) -> Self {
        let link_repository = Arc::new(InMemoryLinkRepository::new());
        let click_repository = Arc::new(InMemoryClickRepository::new());

        let link_service = Arc::new(LinkService::new(
            link_repository.clone(),
            clock.clone(),
            settings,
        ));
        let stats_service = Arc::new(StatsService::new(
            link_repository.clone(),
            click_repository,
            clock.clone(),
        ));
        let redirect_service = Arc::new(RedirectService::new(
            link_repository,
            stats_service.clone(),
            clock,
        ));

        Self {
            link_service,
            redirect_service,
            stats_service,
            base_url: base_url.into(),
        }
    }

    /// State for the running server, using the system clock.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.base_url.clone(),
            config.link_settings(),
            Arc::new(SystemClock),
        )
    }
}
