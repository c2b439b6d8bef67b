//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Request metadata captured on redirect
//! - [`clock`] - Time source for creation and expiry
//!
//! The domain layer has no dependencies on infrastructure or HTTP. Repository
//! traits are implemented in [`crate::infrastructure::persistence`] and
//! orchestrated by [`crate::application::services`].
//!
//! # Click Processing Flow
//!
//! 1. Redirect handler builds a [`click_event::ClickEvent`] from headers
//! 2. [`crate::application::services::RedirectService`] checks existence and expiry
//! 3. The click is appended via [`repositories::ClickRepository`] before the
//!    redirect response is produced

pub mod click_event;
pub mod clock;
pub mod entities;
pub mod repositories;
