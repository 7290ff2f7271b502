//! Host-facing surface of the Backhaul license add-on.
//!
//! This crate handles:
//! - The compatibility gate that self-deactivates the add-on on an
//!   incompatible host
//! - Admin notices and the license key form
//! - Anti-forgery tokens and the form submission handler
//! - The license check orchestration over `backhaul-license`
//! - The plugin update lookup
//!
//! The host is an explicit [`Host`] trait and the lifecycle is
//! caller-owned: the embedding calls [`Addon::init`], [`Addon::on_request`]
//! and [`Addon::on_submit`] instead of registering callbacks in a global
//! dispatch table.

mod addon;
mod check;
mod error;
mod form;
mod gate;
mod host;
mod nonce;
mod notices;
mod updater;
mod version;

pub use addon::Addon;
pub use check::{CheckLicense, LICENSE_ACTIVATION_NOTICES, LICENSE_CHECK_NOTICES};
pub use error::{AddonError, AddonResult};
pub use form::{render_license_form, Redirect, SubmitRequest, LICENSE_KEY_FIELD};
pub use gate::{AddonConfig, AddonState, CompatibilityGate, COMPATIBILITY_NOTICES};
pub use host::Host;
pub use nonce::{NonceFactory, NONCE_WINDOW_SECS};
pub use notices::{esc_html, Notices};
pub use updater::{PluginUpdater, UpdateCheck};
pub use version::{at_least, compare};
