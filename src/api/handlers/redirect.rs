//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_meta::click_event_from_headers;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// # Request Flow
///
/// 1. Look up the code
/// 2. Reject expired links with 410 Gone
/// 3. Record the click (source from `Referer`, location from country headers)
/// 4. Return 302 Found with `Location` set to the stored URL
///
/// The click is stored before the response is sent, so statistics read
/// after a redirect always include it.
///
/// # Errors
///
/// - 404 Not Found if the code doesn't exist
/// - 410 Gone if the link has expired
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let event = click_event_from_headers(&headers);
    let link = state.redirect_service.resolve(&code, event).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, link.long_url)]))
}
