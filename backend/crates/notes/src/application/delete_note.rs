//! Delete Note Use Case

use std::sync::Arc;

use crate::domain::repository::NoteRepository;
use crate::error::{NotesError, NotesResult};
use kernel::id::{NoteId, UserId};

/// Delete note use case
pub struct DeleteNoteUseCase<R>
where
    R: NoteRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteNoteUseCase<R>
where
    R: NoteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Permanently remove a note; unknown and foreign-owned ids are the
    /// same 404
    pub async fn execute(&self, user_id: &UserId, note_id: &NoteId) -> NotesResult<()> {
        let deleted = self.repo.delete_owned(note_id, user_id).await?;

        if !deleted {
            return Err(NotesError::NoteNotFound);
        }

        tracing::info!(note_id = %note_id, user_id = %user_id, "Note deleted");

        Ok(())
    }
}
