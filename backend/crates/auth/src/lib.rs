//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User registration and login with email + password
//! - Stateless signed bearer tokens (24 hour validity window)
//! - Password-reset flow with single-use, time-limited recovery tokens
//! - One-device-per-account binding, established at first login
//!
//! ## Security Model
//! - Passwords stored as an unsalted SHA-256 digest - a documented weak
//!   policy kept for contract compatibility (see `platform::password`)
//! - Bearer tokens are HMAC-SHA256 signed and carry their own expiry;
//!   there is no revocation list, so a password reset does not invalidate
//!   outstanding tokens
//! - Unknown accounts are indistinguishable from known ones on the
//!   forgot-password and reset-token paths (anti-enumeration)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
