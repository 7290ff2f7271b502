//! License validation for Backhaul add-ons.
//!
//! This crate handles:
//! - The persisted license record and the store's status vocabulary
//! - Pure classification of a status/expiry into valid/invalid/inactive/expired
//! - The EDD licensing API client (check, activate, version lookup)
//! - The host-managed settings slot and the once-daily check gate
//!
//! # Design Principles
//!
//! - **One call per check**: each license check is a single bounded HTTP GET,
//!   never retried; a failed check is surfaced to the user and tried again no
//!   sooner than the next daily check
//! - **Cache-first**: the persisted record answers every question between
//!   daily checks, so most admin page loads touch no network at all
//! - **Explicit host seam**: the host's key-value storage is a trait, not an
//!   ambient global, so any embedding can supply its own slot
//! - **Injectable clock**: expiry classification never reads the wall clock
//!   directly

mod cache;
mod clock;
mod edd;
mod error;
mod record;
mod store;
mod validator;

pub use cache::{CheckGate, CHECK_INTERVAL, DAILY_CHECK_FLAG};
pub use clock::{Clock, FixedClock, SystemClock};
pub use edd::{EddClient, EddConfig, EddResponse, VersionResponse};
pub use error::{LicenseError, LicenseResult};
pub use record::{LicenseSettings, LicenseStatus};
pub use store::{JsonFileStore, MemoryStore, SettingsStore};
pub use validator::{is_expired, parse_expiry};
