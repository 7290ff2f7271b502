//! Shared test helpers for the add-on surface.

#![allow(dead_code)]

use backhaul_addon::{AddonConfig, CheckLicense, Host};
use backhaul_license::{Clock, EddClient, EddConfig, LicenseSettings, LicenseStatus, MemoryStore};
use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::MockServer;

/// A clock that tests can advance by hand.
#[derive(Clone)]
pub struct StepClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl StepClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += chrono::Duration::from_std(by).unwrap();
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// A fixed reference instant used across tests.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
}

/// A scripted host that records deactivation requests.
pub struct FakeHost {
    version: Option<String>,
    deactivated: Mutex<Vec<String>>,
}

impl FakeHost {
    pub fn compatible() -> Self {
        Self::with_version(Some("3.2.0"))
    }

    pub fn with_version(version: Option<&str>) -> Self {
        Self {
            version: version.map(str::to_string),
            deactivated: Mutex::new(Vec::new()),
        }
    }

    pub fn deactivations(&self) -> Vec<String> {
        self.deactivated.lock().unwrap().clone()
    }
}

impl Host for FakeHost {
    fn version(&self) -> Option<String> {
        self.version.clone()
    }

    fn deactivate_addon(&self, slug: &str) {
        self.deactivated.lock().unwrap().push(slug.to_string());
    }

    fn site_url(&self) -> String {
        "https://example.com".to_string()
    }
}

/// The add-on identity used across tests.
pub fn addon_config() -> AddonConfig {
    AddonConfig {
        plugin_version: "1.2.0".to_string(),
        min_host_version: "3.1.4".to_string(),
        host_name: "Backhaul".to_string(),
        download_name: "Backhaul S3 Add-on".to_string(),
        slug: "backhaul-s3".to_string(),
        prefix: "s3".to_string(),
    }
}

/// An EDD client pointed at a mock store.
pub fn mock_edd(server: &MockServer) -> EddClient {
    EddClient::new(EddConfig {
        store_url: server.uri(),
        item_name: "Backhaul S3 Add-on".to_string(),
    })
}

/// A checker over a memory store and a mock store server.
pub fn checker(
    server: &MockServer,
    store: Arc<MemoryStore>,
    clock: Arc<dyn Clock>,
) -> CheckLicense {
    CheckLicense::new(
        "s3",
        mock_edd(server),
        store,
        Arc::new(FakeHost::compatible()),
    )
    .with_clock(clock)
}

/// A persisted record for a valid, unexpired key.
pub fn valid_settings() -> LicenseSettings {
    LicenseSettings {
        license_key: "abc-123".to_string(),
        license_status: Some(LicenseStatus::Valid),
        license_expired: false,
        expiry_date: Some("2099-01-01".to_string()),
    }
}
