//! Error types for the licensing crate.

use thiserror::Error;

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;

/// Errors that can occur while checking or activating a license.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Network or timeout failure reaching the licensing API.
    #[error("network error: {0}")]
    Transport(String),

    /// The licensing API answered with a non-200 status.
    #[error("server error: HTTP {status}")]
    Server {
        /// The HTTP status code the store answered with.
        status: u16,
    },

    /// The response body was not the expected JSON shape.
    #[error("invalid API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The settings slot could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),
}
