//! API route configuration.

use crate::api::handlers::{
    batch_shorten_handler, health_handler, redirect_handler, shorten_handler, stats_handler,
    stats_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /shorten`             - Create a short link
/// - `POST /shorten/batch`       - Create up to five short links
/// - `GET  /health`              - Store health check
/// - `GET  /stats`               - Click totals for all links (paginated)
/// - `GET  /{shortcode}`         - Redirect to the stored URL
/// - `GET  /{shortcode}/stats`   - Click log for one link
///
/// The static segments win over `/{shortcode}`, which is why `shorten`,
/// `health`, and `stats` can never be issued as codes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/shorten/batch", post(batch_shorten_handler))
        .route("/health", get(health_handler))
        .route("/stats", get(stats_list_handler))
        .route("/{code}", get(redirect_handler))
        .route("/{code}/stats", get(stats_handler))
        .with_state(state)
}
