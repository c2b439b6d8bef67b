//! Link creation and retrieval service.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use serde_json::json;
use tokio_retry::RetryIf;
use tokio_retry::strategy::FixedInterval;
use tracing::{debug, info, warn};

use crate::domain::clock::Clock;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{
    DEFAULT_CODE_LENGTH, generate_code, is_reserved, validate_custom_code,
};
use crate::utils::url_validator::validate_target_url;

/// Upper bound for any configured validity: 100 years.
pub const MAX_VALIDITY_MINUTES_LIMIT: i64 = 100 * 525_600;

/// Tunables for link creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSettings {
    /// Length of generated codes.
    pub code_length: usize,
    /// Generation attempts before giving up with [`AppError::Exhausted`].
    pub max_attempts: usize,
    /// Validity applied when the request omits one.
    pub default_validity_minutes: i64,
    pub max_validity_minutes: i64,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: 10,
            default_validity_minutes: 30,
            max_validity_minutes: 525_600,
        }
    }
}

/// Service for creating and retrieving short links.
///
/// Handles URL validation, validity window computation, and code
/// generation. Uniqueness is enforced by the repository's create-or-fail
/// operation, never by a separate lookup.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    clock: Arc<dyn Clock>,
    settings: LinkSettings,
}

impl<L: LinkRepository> LinkService<L> {
    pub fn new(link_repository: Arc<L>, clock: Arc<dyn Clock>, settings: LinkSettings) -> Self {
        Self {
            link_repository,
            clock,
            settings,
        }
    }

    pub fn settings(&self) -> LinkSettings {
        self.settings
    }

    /// Creates a short link valid for `validity_minutes` from now.
    ///
    /// # Code Selection
    ///
    /// - With `custom_code`: the code is validated and inserted as-is; a
    ///   taken code fails with [`AppError::Collision`]
    /// - Without: random codes are inserted until one is free, at most
    ///   `max_attempts` times, then [`AppError::Exhausted`]
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL, validity, or custom code
    /// is malformed.
    pub async fn create_short_link(
        &self,
        long_url: &str,
        validity_minutes: Option<i64>,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        let long_url = long_url.trim();
        validate_target_url(long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let created_at = self.clock.now();
        let expires_at = self.expiry_for(validity_minutes, created_at)?;

        let link = match custom_code {
            Some(custom) => {
                validate_custom_code(&custom)?;

                let new_link = NewLink {
                    code: custom.clone(),
                    long_url: long_url.to_string(),
                    created_at,
                    expires_at,
                    requested_code: Some(custom),
                };

                self.link_repository.create(new_link).await.inspect_err(|e| {
                    if matches!(e, AppError::Collision { .. }) {
                        info!("Requested shortcode is taken");
                    }
                })?
            }
            None => {
                self.create_with_generated_code(long_url, created_at, expires_at)
                    .await?
            }
        };

        metrics::counter!("links_created_total").increment(1);
        info!(
            code = %link.code,
            expires_at = %link.expires_at,
            "Short link created"
        );

        Ok(link)
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "shortcode": code })))
    }

    /// Builds the public short URL for a code.
    pub fn get_short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    /// Checks the requested validity and computes the expiry time.
    ///
    /// Overflowing `DateTime` arithmetic is reported as a validation error.
    fn expiry_for(
        &self,
        validity_minutes: Option<i64>,
        created_at: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, AppError> {
        let validity = validity_minutes.unwrap_or(self.settings.default_validity_minutes);
        let invalid = || {
            AppError::bad_request(
                "Validity must be a positive integer",
                json!({
                    "validity_minutes": validity,
                    "max_validity_minutes": self.settings.max_validity_minutes,
                }),
            )
        };

        if validity <= 0 || validity > self.settings.max_validity_minutes {
            return Err(invalid());
        }

        TimeDelta::try_minutes(validity)
            .and_then(|delta| created_at.checked_add_signed(delta))
            .ok_or_else(invalid)
    }

    async fn create_with_generated_code(
        &self,
        long_url: &str,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<Link, AppError> {
        let max_attempts = self.settings.max_attempts.max(1);
        let strategy = FixedInterval::from_millis(0).take(max_attempts - 1);

        let result = RetryIf::spawn(
            strategy,
            || {
                let new_link = NewLink {
                    code: generate_code(self.settings.code_length),
                    long_url: long_url.to_string(),
                    created_at,
                    expires_at,
                    requested_code: None,
                };
                async move { self.insert_generated(new_link).await }
            },
            |err: &AppError| matches!(err, AppError::Collision { .. }),
        )
        .await;

        result.map_err(|err| match err {
            AppError::Collision { .. } => {
                warn!(max_attempts, "Code generation exhausted");
                AppError::exhausted(
                    "Failed to generate unique code",
                    json!({ "attempts": max_attempts }),
                )
            }
            other => other,
        })
    }

    async fn insert_generated(&self, new_link: NewLink) -> Result<Link, AppError> {
        if is_reserved(&new_link.code) {
            return Err(AppError::collision(
                "Generated code is reserved",
                json!({ "shortcode": new_link.code }),
            ));
        }

        self.link_repository.create(new_link).await.inspect_err(|e| {
            if matches!(e, AppError::Collision { .. }) {
                debug!("Generated code collided, retrying");
            }
        })
    }
}
