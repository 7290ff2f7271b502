//! The once-daily check gate.
//!
//! A named flag with a 24-hour expiry decides whether the API is consulted
//! or the persisted record reused. The flag read and write are not atomic:
//! two requests straddling the expiry boundary can both issue a check. The
//! duplicate call is accepted at the request volume an admin dashboard sees.

use crate::error::LicenseResult;
use crate::store::SettingsStore;
use std::time::Duration;

/// Lifetime of the daily check flag: one day.
pub const CHECK_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Name of the daily license check flag.
pub const DAILY_CHECK_FLAG: &str = "daily_license_check";

/// Gates the daily license check against the settings store.
pub struct CheckGate<'a> {
    store: &'a dyn SettingsStore,
}

impl<'a> CheckGate<'a> {
    /// Creates a gate over the given store.
    #[must_use]
    pub fn new(store: &'a dyn SettingsStore) -> Self {
        Self { store }
    }

    /// Returns true if the daily flag is absent or expired.
    #[must_use]
    pub fn should_check(&self) -> bool {
        !self.store.flag(DAILY_CHECK_FLAG)
    }

    /// Marks the check as done for the next 24 hours.
    pub fn mark_checked(&self) -> LicenseResult<()> {
        self.store.set_flag(DAILY_CHECK_FLAG, CHECK_INTERVAL)
    }
}
