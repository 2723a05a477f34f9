//! Notes Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Ownership Model
//! - Every operation is scoped to the authenticated user's id, taken from
//!   the validated bearer token
//! - A note that does not exist and a note owned by someone else produce
//!   the same 404 - existence is never disclosed across accounts
//! - Listings are ordered newest-first by creation time

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::NotesConfig;
pub use error::{NotesError, NotesResult};
pub use infra::postgres::PgNotesRepository;
pub use presentation::router::notes_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
