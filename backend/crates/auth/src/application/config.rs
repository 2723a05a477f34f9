//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at process
//! start and injected into routers; nothing reads ambient global state.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Server secret for HMAC-signing access tokens (32 bytes)
    pub token_secret: [u8; 32],
    /// Access-token validity window (24 hours)
    pub access_token_ttl: Duration,
    /// Recovery-token validity window (exactly 1 hour)
    pub reset_token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            access_token_ttl: Duration::from_secs(24 * 3600),
            reset_token_ttl: Duration::from_secs(3600),
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Get the access-token TTL in milliseconds
    pub fn access_token_ttl_ms(&self) -> i64 {
        self.access_token_ttl.as_millis() as i64
    }

    /// Get the reset-token TTL as a chrono duration
    pub fn reset_token_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.reset_token_ttl)
            .expect("reset token TTL fits in chrono::Duration")
    }
}
