//! Anti-forgery tokens for the license form.
//!
//! Tokens are derived from a per-install random secret, the action name,
//! and a coarse time window, so they expire on their own and need no
//! persistence. Verification accepts the current and the previous window,
//! giving each token a lifetime between 12 and 24 hours.

use backhaul_license::{Clock, SystemClock};
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// Width of a nonce time window: half the 24-hour token lifetime.
pub const NONCE_WINDOW_SECS: i64 = 12 * 60 * 60;

/// Length of an issued token in hex characters.
const TOKEN_LEN: usize = 10;

/// Issues and verifies per-action anti-forgery tokens.
pub struct NonceFactory {
    secret: [u8; 32],
    clock: Arc<dyn Clock>,
}

impl NonceFactory {
    /// Creates a factory with a fresh random secret on the system clock.
    #[must_use]
    pub fn new() -> Self {
        let mut secret = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut secret);
        Self::with_parts(secret, Arc::new(SystemClock))
    }

    /// Creates a factory from a known secret and clock.
    #[must_use]
    pub fn with_parts(secret: [u8; 32], clock: Arc<dyn Clock>) -> Self {
        Self { secret, clock }
    }

    /// Issues a token for `action` in the current time window.
    #[must_use]
    pub fn issue(&self, action: &str) -> String {
        self.token_for(action, self.window(0))
    }

    /// Verifies a token for `action`, accepting the current and the
    /// previous window.
    #[must_use]
    pub fn verify(&self, action: &str, token: &str) -> bool {
        token == self.token_for(action, self.window(0))
            || token == self.token_for(action, self.window(1))
    }

    fn window(&self, back: i64) -> i64 {
        self.clock.now().timestamp().div_euclid(NONCE_WINDOW_SECS) - back
    }

    fn token_for(&self, action: &str, window: i64) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.secret);
        hasher.update(action.as_bytes());
        hasher.update(window.to_le_bytes());
        let digest = hasher.finalize();
        let mut token = hex::encode(digest);
        token.truncate(TOKEN_LEN);
        token
    }
}

impl Default for NonceFactory {
    fn default() -> Self {
        Self::new()
    }
}
