//! Application Configuration
//!
//! Configuration for the Notes application layer. The token secret is the
//! same server-held secret the auth crate signs with; notes only ever
//! verifies.

/// Notes application configuration
#[derive(Debug, Clone)]
pub struct NotesConfig {
    /// Server secret for verifying bearer-token signatures (32 bytes)
    pub token_secret: [u8; 32],
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
        }
    }
}

impl NotesConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
        }
    }
}
