//! Click metadata extraction from HTTP request headers.

use axum::http::{HeaderMap, HeaderName, header};

use crate::domain::click_event::ClickEvent;

/// Country headers set by common edge proxies, checked in order.
const COUNTRY_HEADERS: &[&str] = &["cf-ipcountry", "x-country-code"];

/// Builds a [`ClickEvent`] from redirect request headers.
///
/// Reads `Referer`, `User-Agent`, and the first country header present.
/// Headers with non-UTF-8 values are treated as absent.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::REFERER, "https://google.com/".parse().unwrap());
///
/// let event = click_event_from_headers(&headers);
/// assert_eq!(event.source(), "google.com");
/// assert_eq!(event.location(), "unknown");
/// ```
pub fn click_event_from_headers(headers: &HeaderMap) -> ClickEvent {
    let country = COUNTRY_HEADERS
        .iter()
        .copied()
        .find_map(|name| header_str(headers, &HeaderName::from_static(name)));

    ClickEvent::new(
        header_str(headers, &header::REFERER),
        country,
        header_str(headers, &header::USER_AGENT),
    )
}

fn header_str<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
