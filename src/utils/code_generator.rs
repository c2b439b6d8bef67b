//! Short code generation and validation utilities.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use serde_json::json;

/// Default length of generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Longest code accepted, generated or requested.
pub const MAX_CODE_LENGTH: usize = 10;

/// Codes that would shadow fixed routes.
const RESERVED_CODES: &[&str] = &["shorten", "health", "stats"];

/// Generates a random code of `length` characters from `[A-Za-z0-9]`.
///
/// Uniqueness is not checked here; callers insert through the store's
/// create-or-fail operation and retry on collision.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true for codes that collide with fixed routes.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Validates a user-requested custom short code.
///
/// # Rules
///
/// - Length: 1-10 characters
/// - Allowed characters: ASCII letters and digits
/// - Cannot be a reserved route word
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CODE_LENGTH {
        return Err(AppError::bad_request(
            "Shortcode must be alphanumeric and max 10 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::bad_request(
            "Shortcode must be alphanumeric and max 10 characters",
            json!({ "shortcode": code }),
        ));
    }

    if is_reserved(code) {
        return Err(AppError::bad_request(
            "This shortcode is reserved",
            json!({ "shortcode": code }),
        ));
    }

    Ok(())
}
