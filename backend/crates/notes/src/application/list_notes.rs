//! List Notes Use Case

use std::sync::Arc;

use crate::domain::entities::Note;
use crate::domain::repository::NoteRepository;
use crate::error::NotesResult;
use kernel::id::UserId;

/// List notes use case
pub struct ListNotesUseCase<R>
where
    R: NoteRepository,
{
    repo: Arc<R>,
}

impl<R> ListNotesUseCase<R>
where
    R: NoteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All notes owned by `user_id`, newest first
    ///
    /// A user with no notes gets an empty list, not an error.
    pub async fn execute(&self, user_id: &UserId) -> NotesResult<Vec<Note>> {
        let notes = self.repo.list_by_owner(user_id).await?;

        tracing::debug!(user_id = %user_id, count = notes.len(), "Listed notes");

        Ok(notes)
    }
}
