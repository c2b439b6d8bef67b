//! # URL Shortener
//!
//! An HTTP service that turns long URLs into short, expiring codes and
//! records every redirect for statistics. Built with Axum; all state lives
//! in memory.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities, clock, and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Concurrent in-memory stores
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random or custom alphanumeric shortcodes with bounded collision retry
//! - Per-link validity window; expired links answer `410 Gone`
//! - Click log with referrer source and country per redirect
//! - Batch shortening of up to five URLs
//! - Rate limiting and structured request tracing
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="https://s.example.com"
//! cargo run
//!
//! curl -X POST localhost:3000/shorten \
//!   -H 'content-type: application/json' \
//!   -d '{"longUrl": "https://example.com", "validityMinutes": 60}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        LinkService, LinkSettings, RedirectService, StatsService,
    };
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::{Click, Link, LinkState, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
