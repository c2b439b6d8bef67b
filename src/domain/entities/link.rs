//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Logical lifecycle state of a link.
///
/// A link starts `Active` and becomes `Expired` once its expiry time is
/// reached. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkState {
    Active,
    Expired,
}

/// A shortened URL with its validity window.
///
/// `long_url` is stored exactly as submitted. `requested_code` records the
/// custom code the caller asked for; it is `None` for generated codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub requested_code: Option<String>,
}

impl Link {
    /// Builds a stored link from creation input.
    pub fn from_new(new_link: NewLink) -> Self {
        Self {
            code: new_link.code,
            long_url: new_link.long_url,
            created_at: new_link.created_at,
            expires_at: new_link.expires_at,
            requested_code: new_link.requested_code,
        }
    }

    /// Returns true once `now` has reached the expiry time.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn state_at(&self, now: DateTime<Utc>) -> LinkState {
        if self.is_expired_at(now) {
            LinkState::Expired
        } else {
            LinkState::Active
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub requested_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn link_created_at(created_at: DateTime<Utc>, minutes: i64) -> Link {
        Link::from_new(NewLink {
            code: "abc123".to_string(),
            long_url: "https://example.com".to_string(),
            created_at,
            expires_at: created_at + Duration::minutes(minutes),
            requested_code: None,
        })
    }

    #[test]
    fn test_link_from_new() {
        let now = Utc::now();
        let link = Link::from_new(NewLink {
            code: "promo".to_string(),
            long_url: "https://rust-lang.org".to_string(),
            created_at: now,
            expires_at: now + Duration::minutes(30),
            requested_code: Some("promo".to_string()),
        });

        assert_eq!(link.code, "promo");
        assert_eq!(link.long_url, "https://rust-lang.org");
        assert_eq!(link.created_at, now);
        assert_eq!(link.requested_code.as_deref(), Some("promo"));
    }

    #[test]
    fn test_link_active_before_expiry() {
        let created = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        let link = link_created_at(created, 1);

        assert!(!link.is_expired_at(created));
        assert_eq!(
            link.state_at(created + Duration::seconds(59)),
            LinkState::Active
        );
    }

    #[test]
    fn test_link_expired_at_boundary() {
        let created = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        let link = link_created_at(created, 1);

        assert!(link.is_expired_at(created + Duration::minutes(1)));
        assert_eq!(
            link.state_at(created + Duration::seconds(61)),
            LinkState::Expired
        );
    }

    #[test]
    fn test_link_state_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(LinkState::Expired).unwrap(),
            serde_json::json!("expired")
        );
    }
}
