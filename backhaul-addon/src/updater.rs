//! Plugin update lookup against the store.
//!
//! The updater is entirely disabled while no license key is stored; with a
//! key, it asks the store for the latest released version and compares it
//! to the installed one.

use crate::version;
use backhaul_license::{EddClient, LicenseResult, SettingsStore};
use tracing::debug;

/// Result of an update lookup.
#[derive(Debug, Clone)]
pub struct UpdateCheck {
    /// Installed add-on version.
    pub installed: String,
    /// Latest version the store offers.
    pub latest: String,
    /// Download URL, when the license allows the release.
    pub package: Option<String>,
}

impl UpdateCheck {
    /// True when the store offers a newer version than the installed one.
    #[must_use]
    pub fn update_available(&self) -> bool {
        !version::at_least(&self.installed, &self.latest)
    }
}

/// Looks up add-on releases on the store.
pub struct PluginUpdater {
    edd: EddClient,
    installed_version: String,
}

impl PluginUpdater {
    /// Creates an updater for the installed version.
    #[must_use]
    pub fn new(edd: EddClient, installed_version: &str) -> Self {
        Self {
            edd,
            installed_version: installed_version.to_string(),
        }
    }

    /// Asks the store for the latest version.
    ///
    /// Returns `Ok(None)` without touching the network when no license key
    /// is stored.
    pub async fn check_for_update(
        &self,
        store: &dyn SettingsStore,
        site_url: &str,
    ) -> LicenseResult<Option<UpdateCheck>> {
        let settings = store.fetch()?;
        if settings.is_first_activation() {
            debug!("no license key stored, skipping update lookup");
            return Ok(None);
        }

        let response = self
            .edd
            .get_version(&settings.license_key, site_url)
            .await?;

        Ok(Some(UpdateCheck {
            installed: self.installed_version.clone(),
            latest: response.new_version,
            package: response.package,
        }))
    }
}
