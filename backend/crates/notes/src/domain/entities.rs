//! Domain Entities
//!
//! Core business entities for the notes domain.

use chrono::{DateTime, Utc};
use kernel::id::{NoteId, UserId};

use crate::domain::value_objects::{NoteContent, NoteTitle};

/// Note entity
///
/// `note_id`, `user_id`, and `created_at` are immutable for the note's
/// whole lifetime; a note is never transferred between users.
#[derive(Debug, Clone)]
pub struct Note {
    /// System-generated identifier (UUID v4)
    pub note_id: NoteId,
    pub title: NoteTitle,
    pub content: NoteContent,
    /// Optional image reference, stored as supplied
    pub image_url: Option<String>,
    /// Owning user
    pub user_id: UserId,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a new note owned by `user_id`
    ///
    /// `created_at` and `updated_at` start equal.
    pub fn new(
        user_id: UserId,
        title: NoteTitle,
        content: NoteContent,
        image_url: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            note_id: NoteId::new(),
            title,
            content,
            image_url,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace title, content, and image url, refreshing `updated_at`
    pub fn apply_update(
        &mut self,
        title: NoteTitle,
        content: NoteContent,
        image_url: Option<String>,
    ) {
        self.title = title;
        self.content = content;
        self.image_url = image_url;
        self.updated_at = Utc::now();
    }
}
