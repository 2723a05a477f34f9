//! Get Note Use Case

use std::sync::Arc;

use crate::domain::entities::Note;
use crate::domain::repository::NoteRepository;
use crate::error::{NotesError, NotesResult};
use kernel::id::{NoteId, UserId};

/// Get note use case
pub struct GetNoteUseCase<R>
where
    R: NoteRepository,
{
    repo: Arc<R>,
}

impl<R> GetNoteUseCase<R>
where
    R: NoteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch one note; unknown and foreign-owned ids are the same 404
    pub async fn execute(&self, user_id: &UserId, note_id: &NoteId) -> NotesResult<Note> {
        self.repo
            .find_owned(note_id, user_id)
            .await?
            .ok_or(NotesError::NoteNotFound)
    }
}
