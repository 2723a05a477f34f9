//! Update Note Use Case

use std::sync::Arc;

use crate::domain::entities::Note;
use crate::domain::repository::NoteRepository;
use crate::domain::value_objects::{NoteContent, NoteTitle};
use crate::error::{NotesError, NotesResult};
use kernel::id::{NoteId, UserId};

/// Update note input
pub struct UpdateNoteInput {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

/// Update note use case
pub struct UpdateNoteUseCase<R>
where
    R: NoteRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateNoteUseCase<R>
where
    R: NoteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Replace a note's title/content/image url
    ///
    /// `note_id`, `created_at`, and the owner never change. Validation
    /// failures leave the stored note untouched.
    pub async fn execute(
        &self,
        user_id: &UserId,
        note_id: &NoteId,
        input: UpdateNoteInput,
    ) -> NotesResult<Note> {
        let mut note = self
            .repo
            .find_owned(note_id, user_id)
            .await?
            .ok_or(NotesError::NoteNotFound)?;

        let title = NoteTitle::new(input.title)?;
        let content = NoteContent::new(input.content)?;

        note.apply_update(title, content, input.image_url);

        self.repo.update(&note).await?;

        tracing::info!(note_id = %note.note_id, user_id = %user_id, "Note updated");

        Ok(note)
    }
}
