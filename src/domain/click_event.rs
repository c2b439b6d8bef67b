//! Request metadata captured for click tracking.

use chrono::{DateTime, Utc};
use url::Url;

use crate::domain::entities::{DIRECT_SOURCE, NewClick, UNKNOWN_LOCATION};

/// Client metadata taken from a redirect request.
///
/// Built by the redirect handler from request headers and handed to
/// [`crate::application::services::RedirectService::resolve`], which turns it
/// into a [`NewClick`] once the link is known to be active.
#[derive(Debug, Clone, Default)]
pub struct ClickEvent {
    pub referer: Option<String>,
    pub country: Option<String>,
    pub user_agent: Option<String>,
}

impl ClickEvent {
    pub fn new(referer: Option<&str>, country: Option<&str>, user_agent: Option<&str>) -> Self {
        Self {
            referer: referer.map(|s| s.to_string()),
            country: country.map(|s| s.to_string()),
            user_agent: user_agent.map(|s| s.to_string()),
        }
    }

    /// Host of the referring page, or `"direct"`.
    pub fn source(&self) -> String {
        self.referer
            .as_deref()
            .and_then(|r| Url::parse(r).ok())
            .and_then(|u| u.host_str().map(|h| h.to_ascii_lowercase()))
            .unwrap_or_else(|| DIRECT_SOURCE.to_string())
    }

    /// Country reported by the edge proxy, or `"unknown"`.
    pub fn location(&self) -> String {
        self.country
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string())
    }

    pub fn into_new_click(self, code: &str, clicked_at: DateTime<Utc>) -> NewClick {
        NewClick {
            code: code.to_string(),
            clicked_at,
            source: self.source(),
            location: self.location(),
            user_agent: self.user_agent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_event_defaults_to_direct_unknown() {
        let event = ClickEvent::default();

        assert_eq!(event.source(), "direct");
        assert_eq!(event.location(), "unknown");
    }

    #[test]
    fn test_click_event_source_from_referer_host() {
        let event = ClickEvent::new(Some("https://News.Example.org/item?id=1"), None, None);
        assert_eq!(event.source(), "news.example.org");
    }

    #[test]
    fn test_click_event_unparseable_referer_is_direct() {
        let event = ClickEvent::new(Some("not a url"), None, None);
        assert_eq!(event.source(), "direct");
    }

    #[test]
    fn test_click_event_location_from_country() {
        let event = ClickEvent::new(None, Some(" de "), None);
        assert_eq!(event.location(), "DE");

        let blank = ClickEvent::new(None, Some(""), None);
        assert_eq!(blank.location(), "unknown");
    }

    #[test]
    fn test_click_event_into_new_click() {
        let now = Utc::now();
        let event = ClickEvent::new(Some("https://google.com"), Some("FR"), Some("Safari"));

        let click = event.into_new_click("abc123", now);

        assert_eq!(click.code, "abc123");
        assert_eq!(click.clicked_at, now);
        assert_eq!(click.source, "google.com");
        assert_eq!(click.location, "FR");
        assert_eq!(click.user_agent.as_deref(), Some("Safari"));
    }
}
