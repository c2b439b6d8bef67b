//! Click entity representing a single successful redirect.

use chrono::{DateTime, Utc};

/// Source recorded when the request carries no usable `Referer`.
pub const DIRECT_SOURCE: &str = "direct";

/// Location recorded when no country header is present.
pub const UNKNOWN_LOCATION: &str = "unknown";

/// A recorded click on a short link.
///
/// Clicks are append-only and belong to the link identified by `code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub code: String,
    pub clicked_at: DateTime<Utc>,
    pub source: String,
    pub location: String,
    pub user_agent: Option<String>,
}

impl Click {
    pub fn from_new(new_click: NewClick) -> Self {
        Self {
            code: new_click.code,
            clicked_at: new_click.clicked_at,
            source: new_click.source,
            location: new_click.location,
            user_agent: new_click.user_agent,
        }
    }
}

/// Input data for recording a click.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub code: String,
    pub clicked_at: DateTime<Utc>,
    pub source: String,
    pub location: String,
    pub user_agent: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_from_new() {
        let now = Utc::now();
        let click = Click::from_new(NewClick {
            code: "abc123".to_string(),
            clicked_at: now,
            source: "google.com".to_string(),
            location: "DE".to_string(),
            user_agent: Some("Mozilla/5.0".to_string()),
        });

        assert_eq!(click.code, "abc123");
        assert_eq!(click.clicked_at, now);
        assert_eq!(click.source, "google.com");
        assert_eq!(click.location, "DE");
        assert_eq!(click.user_agent.as_deref(), Some("Mozilla/5.0"));
    }
}
