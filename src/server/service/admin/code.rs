//! One-time setup codes for creating the first admin account.
//!
//! When the server starts without any admin user it generates a setup code and logs it.
//! Whoever can read the server log can then create the first admin through
//! `POST /api/auth/setup`. The code lives only in memory, expires after ten minutes and
//! is consumed by the first successful use.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for setup codes in seconds.
const ADMIN_CODE_TTL_SECONDS: u64 = 600;

/// Length of generated setup codes.
const CODE_LENGTH: usize = 32;

/// Stored setup code with its expiry.
#[derive(Clone)]
struct AdminCode {
    code: String,
    expires_at: Instant,
}

impl AdminCode {
    fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// Holds the currently valid setup code, if any.
///
/// Cloning the service shares the underlying code, so the instance stored in
/// `AppState` and the one used at startup to log the code see the same value.
#[derive(Clone)]
pub struct AdminCodeService {
    code: Arc<RwLock<Option<AdminCode>>>,
    ttl: Duration,
}

impl AdminCodeService {
    /// Creates a service with no active code and the default ten minute TTL.
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(ADMIN_CODE_TTL_SECONDS))
    }

    /// Creates a service whose codes expire after `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a new random setup code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The generated 32-character alphanumeric code
    pub async fn generate(&self) -> String {
        let code_string = Self::generate_random_code();
        *self.code.write().await = Some(AdminCode::new(code_string.clone(), self.ttl));
        code_string
    }

    /// Checks `input_code` against the stored code and consumes it on success.
    ///
    /// Expired codes are discarded and never validate. A wrong code leaves the stored
    /// code in place.
    ///
    /// # Returns
    /// - `true` - Code matched and was still valid; it has now been consumed
    /// - `false` - Code doesn't match, has expired, or no code exists
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        let Some(stored_code) = code.as_ref() else {
            return false;
        };

        if stored_code.is_expired() {
            *code = None;
            return false;
        }

        if stored_code.matches(input_code) {
            *code = None;
            return true;
        }

        false
    }

    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect()
    }

    /// Returns whether a non-expired code is stored, discarding an expired one.
    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        match code.as_ref() {
            Some(stored_code) if stored_code.is_expired() => {
                *code = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}
