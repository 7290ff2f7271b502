//! Addon compatibility gate.
//!
//! A one-way state machine run at host-init time: the add-on starts
//! Active and moves to Deactivated when the host is missing or older than
//! the configured minimum. There is no automatic recovery for the rest of
//! the process lifetime; the next init after the host is updated starts
//! Active again.

use crate::error::AddonResult;
use crate::host::Host;
use crate::notices::Notices;
use crate::version;
use backhaul_license::{SettingsStore, DAILY_CHECK_FLAG};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Notice category used for incompatibility messages.
pub const COMPATIBILITY_NOTICES: &str = "compatibility";

/// Identity and compatibility requirements of one add-on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonConfig {
    /// Version of this add-on.
    pub plugin_version: String,
    /// Minimum host application version this add-on works with.
    pub min_host_version: String,
    /// Display name of the host application.
    pub host_name: String,
    /// Product name as registered on the store.
    pub download_name: String,
    /// Slug the host knows this add-on by.
    pub slug: String,
    /// Prefix for form actions and nonce derivation.
    pub prefix: String,
}

/// Whether the add-on is allowed to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddonState {
    /// Compatibility requirements are met.
    Active,
    /// The add-on asked the host to deactivate it.
    Deactivated,
}

/// Runs the compatibility check and owns the resulting state.
pub struct CompatibilityGate {
    config: AddonConfig,
    host: Arc<dyn Host>,
    state: AddonState,
}

impl CompatibilityGate {
    /// Creates a gate in the Active state.
    #[must_use]
    pub fn new(config: AddonConfig, host: Arc<dyn Host>) -> Self {
        Self {
            config,
            host,
            state: AddonState::Active,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> AddonState {
        self.state
    }

    /// True when the host is present and at least the minimum version.
    #[must_use]
    pub fn meets_requirements(&self) -> bool {
        match self.host.version() {
            Some(v) => version::at_least(&v, &self.config.min_host_version),
            None => false,
        }
    }

    /// Host-init check. Deactivates the add-on and queues the
    /// incompatibility notice when requirements are unmet.
    pub fn maybe_self_deactivate(&mut self, notices: &mut Notices) -> AddonState {
        if self.state == AddonState::Deactivated {
            return self.state;
        }

        if self.meets_requirements() {
            return self.state;
        }

        warn!(
            slug = %self.config.slug,
            min_host_version = %self.config.min_host_version,
            "host incompatible, deactivating add-on"
        );
        self.host.deactivate_addon(&self.config.slug);
        notices.set_notices(COMPATIBILITY_NOTICES, vec![self.notice_message()]);
        self.state = AddonState::Deactivated;
        self.state
    }

    /// User-facing incompatibility message.
    #[must_use]
    pub fn notice_message(&self) -> String {
        format!(
            "{} requires {} version {}. Please install or update it first.",
            self.config.download_name, self.config.host_name, self.config.min_host_version
        )
    }

    /// Deactivation cleanup: drops the daily check flag and the settings
    /// slot.
    pub fn deactivate(&self, store: &dyn SettingsStore) -> AddonResult<()> {
        info!(slug = %self.config.slug, "removing add-on settings on deactivation");
        store.delete_flag(DAILY_CHECK_FLAG)?;
        store.delete_all()?;
        Ok(())
    }
}
