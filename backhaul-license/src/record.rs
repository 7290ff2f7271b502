//! The persisted license record and the store's status vocabulary.

use serde::{Deserialize, Serialize};

/// License status strings returned by the EDD licensing API.
///
/// The store distinguishes a key that was never activated (`inactive`) from
/// a key that is active elsewhere but not for this site (`site_inactive`);
/// both classify as inactive here. Any other string fails decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseStatus {
    /// Key is valid and activated for this site.
    Valid,
    /// Key is not known to the store.
    Invalid,
    /// Key exists but has not been activated anywhere.
    Inactive,
    /// Key is activated, but not for this site.
    SiteInactive,
    /// Key is past its expiry date.
    Expired,
}

impl LicenseStatus {
    /// Returns true if the key is valid and activated for this site.
    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns true if the store does not recognize the key.
    #[must_use]
    pub fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Returns true if the key is fine but not activated for this site.
    #[must_use]
    pub fn is_inactive(self) -> bool {
        matches!(self, Self::Inactive | Self::SiteInactive)
    }
}

/// The persisted license settings slot.
///
/// A fresh install starts from `LicenseSettings::default()`: empty key, no
/// status, not expired, no expiry date. `expiry_date` carries the raw date
/// string from the last server response and is only present when the server
/// sent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseSettings {
    /// The license key as entered by the user.
    #[serde(default)]
    pub license_key: String,

    /// Status returned by the last API check, or `None` before any check.
    #[serde(default)]
    pub license_status: Option<LicenseStatus>,

    /// Whether the license was already expired at the last check.
    #[serde(default)]
    pub license_expired: bool,

    /// Raw expiry string from the API, e.g. `2030-01-01 23:59:59`.
    #[serde(default)]
    pub expiry_date: Option<String>,
}

impl LicenseSettings {
    /// Returns true if no license key has ever been stored.
    #[must_use]
    pub fn is_first_activation(&self) -> bool {
        self.license_key.trim().is_empty()
    }
}
