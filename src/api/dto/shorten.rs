//! DTOs for the shortening endpoints.

use crate::domain::entities::Link;
use crate::error::ErrorInfo;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("shortcode regex is valid"));

/// Request to shorten a single URL.
///
/// Also `Serialize`, since the batch length check reports the offending
/// list in its error params.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// Target URL. Scheme and host are checked by the link service.
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub long_url: String,

    /// Minutes until expiry. Defaults to the configured validity.
    pub validity_minutes: Option<i64>,

    /// Optional custom shortcode.
    #[validate(length(min = 1, max = 10, message = "Shortcode must be 1-10 characters"))]
    #[validate(regex(path = "*SHORTCODE_REGEX", message = "Shortcode must be alphanumeric"))]
    pub shortcode: Option<String>,
}

/// Created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub shortcode: String,
    pub short_url: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ShortenResponse {
    pub fn from_link(link: Link, short_url: String) -> Self {
        Self {
            shortcode: link.code,
            short_url,
            long_url: link.long_url,
            created_at: link.created_at,
            expires_at: link.expires_at,
        }
    }
}

/// Request to shorten up to five URLs at once.
#[derive(Debug, Deserialize, Validate)]
pub struct BatchShortenRequest {
    #[validate(length(min = 1, max = 5, message = "Between 1 and 5 URLs per batch"))]
    pub urls: Vec<ShortenRequest>,
}

/// Batch results with a summary.
#[derive(Debug, Serialize)]
pub struct BatchShortenResponse {
    pub summary: BatchSummary,
    pub items: Vec<ShortenResultItem>,
}

/// Result for a single URL in the batch.
///
/// Untagged, so a success serializes exactly like [`ShortenResponse`].
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ShortenResultItem {
    Success(ShortenResponse),
    #[serde(rename_all = "camelCase")]
    Error { long_url: String, error: ErrorInfo },
}

#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> ShortenRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_camel_case_fields() {
        let req = request(json!({
            "longUrl": "https://example.com",
            "validityMinutes": 5,
            "shortcode": "abc123"
        }));

        assert_eq!(req.long_url, "https://example.com");
        assert_eq!(req.validity_minutes, Some(5));
        assert_eq!(req.shortcode.as_deref(), Some("abc123"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_optional_fields_absent() {
        let req = request(json!({ "longUrl": "https://example.com" }));

        assert!(req.validity_minutes.is_none());
        assert!(req.shortcode.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_shortcode_rules() {
        let bad = ["my-link", "abcdefghijk", "", "héllo"];
        for code in bad {
            let req = request(json!({ "longUrl": "https://example.com", "shortcode": code }));
            assert!(req.validate().is_err(), "{code:?} should be rejected");
        }
    }

    #[test]
    fn test_empty_url_rejected() {
        let req = request(json!({ "longUrl": "" }));
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_batch_size_limits() {
        let empty: BatchShortenRequest = serde_json::from_value(json!({ "urls": [] })).unwrap();
        assert!(empty.validate().is_err());

        let urls: Vec<_> = (0..6)
            .map(|_| json!({ "longUrl": "https://example.com" }))
            .collect();
        let six: BatchShortenRequest = serde_json::from_value(json!({ "urls": urls })).unwrap();
        assert!(six.validate().is_err());

        let urls: Vec<_> = (0..5)
            .map(|_| json!({ "longUrl": "https://example.com" }))
            .collect();
        let five: BatchShortenRequest = serde_json::from_value(json!({ "urls": urls })).unwrap();
        assert!(five.validate().is_ok());
    }

    #[test]
    fn test_error_item_serialization() {
        let item = ShortenResultItem::Error {
            long_url: "ftp://example.com".to_string(),
            error: ErrorInfo {
                code: "validation_error",
                message: "Invalid URL".to_string(),
                details: json!({}),
            },
        };

        let value = serde_json::to_value(item).unwrap();
        assert_eq!(value["longUrl"], "ftp://example.com");
        assert_eq!(value["error"]["code"], "validation_error");
    }
}
