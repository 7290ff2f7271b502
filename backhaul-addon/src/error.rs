//! Error types for the add-on surface.

use backhaul_license::LicenseError;
use thiserror::Error;

/// Result type for add-on operations.
pub type AddonResult<T> = Result<T, AddonError>;

/// Errors that can occur in the add-on surface.
#[derive(Debug, Error)]
pub enum AddonError {
    /// The request failed the anti-forgery or capability check.
    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),

    /// A licensing-layer failure.
    #[error(transparent)]
    License(#[from] LicenseError),
}
