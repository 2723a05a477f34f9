//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer.
//!
//! Lookups that take an owner use a single combined
//! `(id matches) AND (owner matches)` predicate - never a find-then-check
//! sequence that could leak existence of another user's note.

use crate::domain::entities::Note;
use crate::error::NotesResult;
use kernel::id::{NoteId, UserId};

/// Note repository trait
#[trait_variant::make(NoteRepository: Send)]
pub trait LocalNoteRepository {
    /// Create a new note
    async fn create(&self, note: &Note) -> NotesResult<()>;

    /// Find a note by id, scoped to its owner
    async fn find_owned(&self, note_id: &NoteId, owner: &UserId) -> NotesResult<Option<Note>>;

    /// All notes owned by `owner`, newest first (created_at descending)
    async fn list_by_owner(&self, owner: &UserId) -> NotesResult<Vec<Note>>;

    /// Update a note, scoped to its owner
    async fn update(&self, note: &Note) -> NotesResult<()>;

    /// Delete a note, scoped to its owner; returns whether a row went away
    async fn delete_owned(&self, note_id: &NoteId, owner: &UserId) -> NotesResult<bool>;
}
