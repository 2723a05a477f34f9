//! Create Note Use Case

use std::sync::Arc;

use crate::domain::entities::Note;
use crate::domain::repository::NoteRepository;
use crate::domain::value_objects::{NoteContent, NoteTitle};
use crate::error::NotesResult;
use kernel::id::UserId;

/// Create note input
pub struct CreateNoteInput {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

/// Create note use case
pub struct CreateNoteUseCase<R>
where
    R: NoteRepository,
{
    repo: Arc<R>,
}

impl<R> CreateNoteUseCase<R>
where
    R: NoteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId, input: CreateNoteInput) -> NotesResult<Note> {
        let title = NoteTitle::new(input.title)?;
        let content = NoteContent::new(input.content)?;

        let note = Note::new(*user_id, title, content, input.image_url);

        self.repo.create(&note).await?;

        tracing::info!(
            note_id = %note.note_id,
            user_id = %user_id,
            "Note created"
        );

        Ok(note)
    }
}
