//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls, validation, and time. HTTP handlers
//! only talk to services.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and lookup
//! - [`services::redirect_service::RedirectService`] - Resolution with expiry check and click recording
//! - [`services::stats_service::StatsService`] - Click log and statistics

pub mod services;
