//! The host-managed settings slot, made explicit.
//!
//! The host hands the add-on one named key-value slot for the license
//! record plus named boolean flags with an expiry (the host calls these
//! transients). `store` replaces the slot wholesale; `clear_license`
//! resets the license fields but keeps the slot; `delete_all` is the
//! deactivation cleanup that removes everything.
//!
//! Two implementations ship here: [`MemoryStore`] for tests and embedding
//! hosts that persist elsewhere, and [`JsonFileStore`] for hosts whose
//! slot is a JSON file on disk.

use crate::clock::{Clock, SystemClock};
use crate::error::{LicenseError, LicenseResult};
use crate::record::LicenseSettings;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// The host's key-value slot for license settings and flags.
pub trait SettingsStore: Send + Sync {
    /// Returns the persisted record, or the empty default if none is stored.
    fn fetch(&self) -> LicenseResult<LicenseSettings>;

    /// Replaces the persisted record wholesale.
    fn store(&self, settings: &LicenseSettings) -> LicenseResult<()>;

    /// Resets the license fields to the empty default, keeping the slot.
    fn clear_license(&self) -> LicenseResult<()>;

    /// Removes the slot and every flag. Used on add-on deactivation.
    fn delete_all(&self) -> LicenseResult<()>;

    /// Returns true if the named flag is set and has not expired.
    fn flag(&self, name: &str) -> bool;

    /// Sets the named flag for `ttl` from now.
    fn set_flag(&self, name: &str, ttl: Duration) -> LicenseResult<()>;

    /// Removes the named flag.
    fn delete_flag(&self, name: &str) -> LicenseResult<()>;
}

fn expiry_from(clock: &dyn Clock, ttl: Duration) -> LicenseResult<DateTime<Utc>> {
    let ttl = ChronoDuration::from_std(ttl)
        .map_err(|e| LicenseError::Storage(format!("flag ttl out of range: {e}")))?;
    Ok(clock.now() + ttl)
}

#[derive(Debug, Default)]
struct Slot {
    settings: Option<LicenseSettings>,
    flags: HashMap<String, DateTime<Utc>>,
}

/// An in-memory settings slot.
pub struct MemoryStore {
    slot: Mutex<Slot>,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    /// Creates an empty store on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store on the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            slot: Mutex::new(Slot::default()),
            clock,
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for MemoryStore {
    fn fetch(&self) -> LicenseResult<LicenseSettings> {
        Ok(self.slot().settings.clone().unwrap_or_default())
    }

    fn store(&self, settings: &LicenseSettings) -> LicenseResult<()> {
        self.slot().settings = Some(settings.clone());
        Ok(())
    }

    fn clear_license(&self) -> LicenseResult<()> {
        self.slot().settings = Some(LicenseSettings::default());
        Ok(())
    }

    fn delete_all(&self) -> LicenseResult<()> {
        let mut slot = self.slot();
        slot.settings = None;
        slot.flags.clear();
        Ok(())
    }

    fn flag(&self, name: &str) -> bool {
        let now = self.clock.now();
        self.slot()
            .flags
            .get(name)
            .is_some_and(|expires_at| *expires_at > now)
    }

    fn set_flag(&self, name: &str, ttl: Duration) -> LicenseResult<()> {
        let expires_at = expiry_from(self.clock.as_ref(), ttl)?;
        self.slot().flags.insert(name.to_string(), expires_at);
        Ok(())
    }

    fn delete_flag(&self, name: &str) -> LicenseResult<()> {
        self.slot().flags.remove(name);
        Ok(())
    }
}

/// On-disk shape of the JSON slot.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FileSlot {
    #[serde(default)]
    settings: Option<LicenseSettings>,
    #[serde(default)]
    flags: HashMap<String, DateTime<Utc>>,
}

/// A settings slot persisted as a single JSON file.
///
/// Reads and writes are whole-file; the host's storage layer is assumed
/// to serialize concurrent writers.
pub struct JsonFileStore {
    path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path` on the system clock.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_clock(path, Arc::new(SystemClock))
    }

    /// Creates a store backed by the file at `path` on the given clock.
    #[must_use]
    pub fn with_clock(path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read(&self) -> LicenseResult<FileSlot> {
        if !self.path.exists() {
            return Ok(FileSlot::default());
        }
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| LicenseError::Storage(format!("read {}: {e}", self.path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| LicenseError::Storage(format!("parse {}: {e}", self.path.display())))
    }

    fn write(&self, slot: &FileSlot) -> LicenseResult<()> {
        let raw = serde_json::to_string_pretty(slot)
            .map_err(|e| LicenseError::Storage(format!("encode settings: {e}")))?;
        std::fs::write(&self.path, raw)
            .map_err(|e| LicenseError::Storage(format!("write {}: {e}", self.path.display())))
    }
}

impl SettingsStore for JsonFileStore {
    fn fetch(&self) -> LicenseResult<LicenseSettings> {
        Ok(self.read()?.settings.unwrap_or_default())
    }

    fn store(&self, settings: &LicenseSettings) -> LicenseResult<()> {
        let mut slot = self.read()?;
        slot.settings = Some(settings.clone());
        self.write(&slot)
    }

    fn clear_license(&self) -> LicenseResult<()> {
        let mut slot = self.read()?;
        slot.settings = Some(LicenseSettings::default());
        self.write(&slot)
    }

    fn delete_all(&self) -> LicenseResult<()> {
        if !self.path.exists() {
            return Ok(());
        }
        std::fs::remove_file(&self.path)
            .map_err(|e| LicenseError::Storage(format!("remove {}: {e}", self.path.display())))
    }

    fn flag(&self, name: &str) -> bool {
        let now = self.clock.now();
        self.read()
            .ok()
            .and_then(|slot| slot.flags.get(name).copied())
            .is_some_and(|expires_at| expires_at > now)
    }

    fn set_flag(&self, name: &str, ttl: Duration) -> LicenseResult<()> {
        let expires_at = expiry_from(self.clock.as_ref(), ttl)?;
        let mut slot = self.read()?;
        slot.flags.insert(name.to_string(), expires_at);
        self.write(&slot)
    }

    fn delete_flag(&self, name: &str) -> LicenseResult<()> {
        let mut slot = self.read()?;
        if slot.flags.remove(name).is_some() {
            self.write(&slot)?;
        }
        Ok(())
    }
}
