//! Hetzner Cloud API configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::HcloudError;

/// Largest page size the API accepts.
pub const MAX_PER_PAGE: u32 = 50;

/// Configuration for the Hetzner Cloud host source.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HcloudConfig {
    /// API base URL, without trailing `/servers`.
    pub endpoint: String,
    /// API token (read/only is enough).
    pub token: String,
    /// Servers requested per page.
    pub per_page: u32,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Optional label selector (e.g. `env=prod`) passed through to the API.
    pub label_selector: Option<String>,
}

impl Default for HcloudConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.hetzner.cloud/v1".to_string(),
            token: String::new(),
            per_page: MAX_PER_PAGE,
            timeout_secs: 30,
            label_selector: None,
        }
    }
}

impl HcloudConfig {
    /// The per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check that the API can be contacted with these settings.
    ///
    /// # Errors
    ///
    /// Returns [`HcloudError::Config`] when the token or endpoint is empty or
    /// `per_page` is outside `1..=50`.
    pub fn validate(&self) -> Result<(), HcloudError> {
        if self.token.is_empty() {
            return Err(HcloudError::Config("API token is required".to_string()));
        }
        if self.endpoint.is_empty() {
            return Err(HcloudError::Config("API endpoint is empty".to_string()));
        }
        if !(1..=MAX_PER_PAGE).contains(&self.per_page) {
            return Err(HcloudError::Config(format!(
                "per_page must be between 1 and {MAX_PER_PAGE}, got {}",
                self.per_page
            )));
        }
        Ok(())
    }
}
