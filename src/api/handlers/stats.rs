//! Handler for detailed link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /{shortcode}/stats`
///
/// # Response
///
/// Link metadata, current status (`active` or `expired`), total clicks,
/// and every recorded click in the order it happened. Expired links still
/// report their statistics.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.link_stats(&code).await?;

    Ok(Json(StatsResponse::from(stats)))
}
