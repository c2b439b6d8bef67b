//! Handler for aggregated link statistics.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::stats_list::{LinkStatsItem, PaginationMeta, StatsListResponse};
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;

/// Retrieves click totals for all links.
///
/// # Endpoint
///
/// `GET /stats`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `pageSize` (optional): Items per page (default: 25, max: 100)
///
/// # Response
///
/// Paginated list of links, oldest first, with total click counts.
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn stats_list_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<StatsListResponse>, AppError> {
    let (offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let (all_stats, total_items) = tokio::try_join!(
        state.stats_service.all_stats(offset, limit),
        state.stats_service.count_all_links()
    )?;

    Ok(Json(StatsListResponse {
        pagination: PaginationMeta::new(params.page(), params.page_size(), total_items),
        items: all_stats.into_iter().map(LinkStatsItem::from).collect(),
    }))
}
