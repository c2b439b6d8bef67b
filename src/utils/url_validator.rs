//! Target URL validation.
//!
//! Target URLs are checked but never rewritten: a link redirects to exactly
//! the string that was submitted.

use url::Url;

/// Longest target URL accepted.
pub const MAX_URL_LENGTH: usize = 2048;

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("URL is longer than {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must contain a host")]
    MissingHost,
}

/// Checks that `input` is an absolute HTTP(S) URL with a host.
///
/// # Security
///
/// Rejects `javascript:`, `data:`, `file:` and every other non-HTTP scheme,
/// since the stored value ends up in a `Location` header.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_target_url("https://example.com/path?q=1").is_ok());
/// assert!(validate_target_url("example.com").is_err());
/// assert!(validate_target_url("javascript:alert(1)").is_err());
/// ```
pub fn validate_target_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_http_and_https() {
        assert!(validate_target_url("http://example.com").is_ok());
        assert!(validate_target_url("https://example.com").is_ok());
    }

    #[test]
    fn test_path_query_and_fragment() {
        assert!(validate_target_url("https://example.com/page?key=value#section").is_ok());
    }

    #[test]
    fn test_custom_port_and_ip() {
        assert!(validate_target_url("http://192.168.1.1:8080/api").is_ok());
        assert!(validate_target_url("http://localhost:3000/test").is_ok());
    }

    #[test]
    fn test_encoded_characters() {
        assert!(validate_target_url("https://example.com/path%20with%20spaces").is_ok());
    }

    #[test]
    fn test_empty_string() {
        assert!(matches!(
            validate_target_url(""),
            Err(UrlValidationError::Empty)
        ));
    }

    #[test]
    fn test_no_protocol() {
        assert!(matches!(
            validate_target_url("example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_garbage() {
        assert!(matches!(
            validate_target_url("not a valid url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejected_protocols() {
        for input in [
            "ftp://example.com/file.txt",
            "file:///home/user/document.txt",
            "javascript:alert('xss')",
            "data:text/plain,Hello",
            "mailto:test@example.com",
        ] {
            assert!(
                matches!(
                    validate_target_url(input),
                    Err(UrlValidationError::UnsupportedProtocol)
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_too_long() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(matches!(
            validate_target_url(&url),
            Err(UrlValidationError::TooLong)
        ));
    }

    #[test]
    fn test_long_but_within_limit() {
        let url = format!("https://example.com/{}", "a".repeat(1500));
        assert!(validate_target_url(&url).is_ok());
    }
}
