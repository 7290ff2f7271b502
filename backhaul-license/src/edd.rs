//! Client for the EDD licensing API.
//!
//! Every operation is a single GET against the store URL with an
//! `edd_action` query parameter, bounded by a 15-second timeout and never
//! retried. Any non-200 answer is a server failure; the body of a 200 is
//! JSON carrying the status the store assigned to the key.

use crate::error::{LicenseError, LicenseResult};
use crate::record::LicenseStatus;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Request timeout for licensing API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for the licensing API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EddConfig {
    /// Base URL of the EDD store (e.g. `https://store.backhaul.dev`).
    pub store_url: String,
    /// Product name registered on the store ("item name" in EDD terms).
    pub item_name: String,
}

impl Default for EddConfig {
    fn default() -> Self {
        Self {
            store_url: "https://store.backhaul.dev".to_string(),
            item_name: String::new(),
        }
    }
}

/// Response body for `check_license` and `activate_license`.
#[derive(Debug, Clone, Deserialize)]
pub struct EddResponse {
    /// The status the store assigned to the key.
    pub license: LicenseStatus,
    /// Expiry date string, absent for keys the store does not know.
    #[serde(default)]
    pub expires: Option<String>,
}

/// Response body for `get_version`.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionResponse {
    /// Latest released version of the product.
    pub new_version: String,
    /// Download URL for the release, when the license allows it.
    #[serde(default)]
    pub package: Option<String>,
}

/// The licensing API client.
#[derive(Debug, Clone)]
pub struct EddClient {
    config: EddConfig,
    http: Client,
}

impl EddClient {
    /// Creates a client for the configured store.
    #[must_use]
    pub fn new(config: EddConfig) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to create HTTP client");

        Self { config, http }
    }

    /// Returns the configured product name.
    #[must_use]
    pub fn item_name(&self) -> &str {
        &self.config.item_name
    }

    /// Asks the store to classify `key` for this product.
    pub async fn check(&self, key: &str) -> LicenseResult<EddResponse> {
        let body = self
            .request("check_license", &[("license", key)])
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Activates `key` for the site at `site_url`.
    pub async fn activate(&self, key: &str, site_url: &str) -> LicenseResult<EddResponse> {
        let body = self
            .request("activate_license", &[("license", key), ("url", site_url)])
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches the latest released version of the product.
    pub async fn get_version(&self, key: &str, site_url: &str) -> LicenseResult<VersionResponse> {
        let body = self
            .request("get_version", &[("license", key), ("url", site_url)])
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Issues one GET for `action` and returns the raw 200 body.
    async fn request(&self, action: &str, params: &[(&str, &str)]) -> LicenseResult<String> {
        let mut query: Vec<(&str, &str)> = vec![
            ("edd_action", action),
            ("item_name", &self.config.item_name),
        ];
        query.extend_from_slice(params);

        debug!(action, store = %self.config.store_url, "calling licensing API");

        let response = self
            .http
            .get(&self.config.store_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| LicenseError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(LicenseError::Server { status });
        }

        response
            .text()
            .await
            .map_err(|e| LicenseError::Transport(e.to_string()))
    }
}
