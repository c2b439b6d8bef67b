//! Handlers for the shortening endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{
    BatchShortenRequest, BatchShortenResponse, BatchSummary, ShortenRequest, ShortenResponse,
    ShortenResultItem,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "longUrl": "https://example.com/some/long/path",
///   "validityMinutes": 60,   // optional, default 30
///   "shortcode": "promo1"    // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortcode": "promo1",
///   "shortUrl": "http://localhost:3000/promo1",
///   "longUrl": "https://example.com/some/long/path",
///   "createdAt": "2026-04-01T09:00:00Z",
///   "expiresAt": "2026-04-01T10:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 if the URL, validity, or shortcode is invalid
/// - 409 if the requested shortcode is taken
/// - 503 if no free code could be generated
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let response = shorten_one(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Shortens up to five URLs in one request.
///
/// # Endpoint
///
/// `POST /shorten/batch`
///
/// URLs are processed independently and in order. A failing URL is reported
/// in its result item and does not stop the others.
///
/// # Response
///
/// ```json
/// {
///   "summary": { "total": 2, "successful": 1, "failed": 1 },
///   "items": [
///     { "shortcode": "aB3dE9", "shortUrl": "...", "longUrl": "https://example.com", ... },
///     { "longUrl": "ftp://nope", "error": { "code": "validation_error", ... } }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the batch is empty or has more than five URLs.
pub async fn batch_shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<BatchShortenRequest>,
) -> Result<Json<BatchShortenResponse>, AppError> {
    payload.validate()?;

    let total = payload.urls.len();
    let mut items = Vec::with_capacity(total);
    let mut successful = 0;
    let mut failed = 0;

    for request in payload.urls {
        let long_url = request.long_url.clone();

        match shorten_one(&state, request).await {
            Ok(response) => {
                successful += 1;
                items.push(ShortenResultItem::Success(response));
            }
            Err(err) => {
                failed += 1;
                items.push(ShortenResultItem::Error {
                    long_url,
                    error: err.to_error_info(),
                });
            }
        }
    }

    Ok(Json(BatchShortenResponse {
        summary: BatchSummary {
            total,
            successful,
            failed,
        },
        items,
    }))
}

async fn shorten_one(state: &AppState, request: ShortenRequest) -> Result<ShortenResponse, AppError> {
    request.validate()?;

    let link = state
        .link_service
        .create_short_link(&request.long_url, request.validity_minutes, request.shortcode)
        .await?;

    let short_url = state.link_service.get_short_url(&state.base_url, &link.code);

    Ok(ShortenResponse::from_link(link, short_url))
}
