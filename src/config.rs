//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public prefix for short URLs (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CODE_LENGTH` - Length of generated codes (default: 6, range: 4-10)
//! - `CODE_MAX_ATTEMPTS` - Generation attempts before giving up (default: 10)
//! - `DEFAULT_VALIDITY_MINUTES` - Validity when the request omits one (default: 30)
//! - `MAX_VALIDITY_MINUTES` - Longest validity accepted (default: 525600, one year; at most 100 years)
//! - `RATE_LIMIT_PER_SECOND` - Token refill rate per client IP (default: 10)
//! - `RATE_LIMIT_BURST` - Bucket size per client IP (default: 100)
//!
//! Unparseable numeric values fall back to their defaults.

use anyhow::Result;
use std::env;
use std::str::FromStr;

use crate::application::services::LinkSettings;
use crate::application::services::link_service::MAX_VALIDITY_MINUTES_LIMIT;
use crate::utils::code_generator::MAX_CODE_LENGTH;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Prefix for returned short URLs, e.g. `https://s.example.com`.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub code_length: usize,
    pub code_max_attempts: usize,
    pub default_validity_minutes: i64,
    pub max_validity_minutes: i64,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: "http://localhost:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            code_length: 6,
            code_max_attempts: 10,
            default_validity_minutes: 30,
            max_validity_minutes: 525_600,
            rate_limit_per_second: 10,
            rate_limit_burst: 100,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            base_url: env::var("BASE_URL").unwrap_or(defaults.base_url),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            code_length: env_or("CODE_LENGTH", defaults.code_length),
            code_max_attempts: env_or("CODE_MAX_ATTEMPTS", defaults.code_max_attempts),
            default_validity_minutes: env_or(
                "DEFAULT_VALIDITY_MINUTES",
                defaults.default_validity_minutes,
            ),
            max_validity_minutes: env_or("MAX_VALIDITY_MINUTES", defaults.max_validity_minutes),
            rate_limit_per_second: env_or("RATE_LIMIT_PER_SECOND", defaults.rate_limit_per_second),
            rate_limit_burst: env_or("RATE_LIMIT_BURST", defaults.rate_limit_burst),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an HTTP(S) URL
    /// - code length, attempts, validity, or rate limit values are out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !(4..=MAX_CODE_LENGTH).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between 4 and {}, got {}",
                MAX_CODE_LENGTH,
                self.code_length
            );
        }

        if self.code_max_attempts == 0 || self.code_max_attempts > 100 {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.code_max_attempts
            );
        }

        if !(1..=MAX_VALIDITY_MINUTES_LIMIT).contains(&self.max_validity_minutes) {
            anyhow::bail!(
                "MAX_VALIDITY_MINUTES must be between 1 and {}, got {}",
                MAX_VALIDITY_MINUTES_LIMIT,
                self.max_validity_minutes
            );
        }

        if self.default_validity_minutes < 1
            || self.default_validity_minutes > self.max_validity_minutes
        {
            anyhow::bail!(
                "DEFAULT_VALIDITY_MINUTES must be between 1 and {}, got {}",
                self.max_validity_minutes,
                self.default_validity_minutes
            );
        }

        if self.rate_limit_per_second == 0 {
            anyhow::bail!("RATE_LIMIT_PER_SECOND must be greater than 0");
        }

        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be greater than 0");
        }

        Ok(())
    }

    /// Link creation settings derived from this configuration.
    pub fn link_settings(&self) -> LinkSettings {
        LinkSettings {
            code_length: self.code_length,
            max_attempts: self.code_max_attempts,
            default_validity_minutes: self.default_validity_minutes,
            max_validity_minutes: self.max_validity_minutes,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Codes: length {}, {} attempts",
            self.code_length,
            self.code_max_attempts
        );
        tracing::info!(
            "  Validity: default {} min, max {} min",
            self.default_validity_minutes,
            self.max_validity_minutes
        );
        tracing::info!(
            "  Rate limit: {}/s, burst {}",
            self.rate_limit_per_second,
            self.rate_limit_burst
        );
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "127.0.0.1:3000".to_string();

        config.base_url = "localhost:3000".to_string();
        assert!(config.validate().is_err());
        config.base_url = "https://s.example.com".to_string();

        config.code_length = 3;
        assert!(config.validate().is_err());
        config.code_length = 11;
        assert!(config.validate().is_err());
        config.code_length = 10;
        assert!(config.validate().is_ok());

        config.code_max_attempts = 0;
        assert!(config.validate().is_err());
        config.code_max_attempts = 10;

        config.default_validity_minutes = 0;
        assert!(config.validate().is_err());
        config.default_validity_minutes = config.max_validity_minutes + 1;
        assert!(config.validate().is_err());
        config.default_validity_minutes = 30;

        config.max_validity_minutes = MAX_VALIDITY_MINUTES_LIMIT;
        assert!(config.validate().is_ok());
        config.max_validity_minutes = MAX_VALIDITY_MINUTES_LIMIT + 1;
        assert!(config.validate().is_err());
        config.max_validity_minutes = 1_000_000_000_000;
        assert!(config.validate().is_err());
        config.max_validity_minutes = 525_600;

        config.rate_limit_burst = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_link_settings_from_config() {
        let config = Config {
            code_length: 8,
            code_max_attempts: 3,
            default_validity_minutes: 60,
            max_validity_minutes: 1440,
            ..Config::default()
        };

        let settings = config.link_settings();

        assert_eq!(settings.code_length, 8);
        assert_eq!(settings.max_attempts, 3);
        assert_eq!(settings.default_validity_minutes, 60);
        assert_eq!(settings.max_validity_minutes, 1440);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("BASE_URL", "https://s.example.com");
            env::set_var("CODE_LENGTH", "8");
            env::set_var("DEFAULT_VALIDITY_MINUTES", "15");
        }

        let config = Config::from_env();

        assert_eq!(config.base_url, "https://s.example.com");
        assert_eq!(config.code_length, 8);
        assert_eq!(config.default_validity_minutes, 15);

        // Cleanup
        unsafe {
            env::remove_var("BASE_URL");
            env::remove_var("CODE_LENGTH");
            env::remove_var("DEFAULT_VALIDITY_MINUTES");
        }
    }

    #[test]
    #[serial]
    fn test_unparseable_numbers_fall_back_to_defaults() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("CODE_MAX_ATTEMPTS", "many");
            env::set_var("RATE_LIMIT_BURST", "-1");
        }

        let config = Config::from_env();

        assert_eq!(config.code_max_attempts, 10);
        assert_eq!(config.rate_limit_burst, 100);

        // Cleanup
        unsafe {
            env::remove_var("CODE_MAX_ATTEMPTS");
            env::remove_var("RATE_LIMIT_BURST");
        }
    }

    #[test]
    #[serial]
    fn test_invalid_format_from_env_fails_validation() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        assert!(Config::from_env().validate().is_err());

        // Cleanup
        unsafe {
            env::remove_var("LOG_FORMAT");
        }
    }
}
