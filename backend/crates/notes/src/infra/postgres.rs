//! PostgreSQL Repository Implementation
//!
//! Every owner-scoped statement carries the combined
//! `note_id = $1 AND user_id = $2` predicate; the store never answers a
//! note lookup without the owner in the same clause.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Note;
use crate::domain::repository::NoteRepository;
use crate::domain::value_objects::{NoteContent, NoteTitle};
use crate::error::NotesResult;
use kernel::id::{NoteId, UserId};

/// PostgreSQL-backed note repository
#[derive(Clone)]
pub struct PgNotesRepository {
    pool: PgPool,
}

impl PgNotesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl NoteRepository for PgNotesRepository {
    async fn create(&self, note: &Note) -> NotesResult<()> {
        sqlx::query(
            r#"
            INSERT INTO notes (
                note_id,
                title,
                content,
                image_url,
                user_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(note.note_id.as_uuid())
        .bind(note.title.as_str())
        .bind(note.content.as_str())
        .bind(&note.image_url)
        .bind(note.user_id.as_uuid())
        .bind(note.created_at)
        .bind(note.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_owned(&self, note_id: &NoteId, owner: &UserId) -> NotesResult<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT
                note_id,
                title,
                content,
                image_url,
                user_id,
                created_at,
                updated_at
            FROM notes
            WHERE note_id = $1 AND user_id = $2
            "#,
        )
        .bind(note_id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_note()))
    }

    async fn list_by_owner(&self, owner: &UserId) -> NotesResult<Vec<Note>> {
        let rows = sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT
                note_id,
                title,
                content,
                image_url,
                user_id,
                created_at,
                updated_at
            FROM notes
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_note()).collect())
    }

    async fn update(&self, note: &Note) -> NotesResult<()> {
        sqlx::query(
            r#"
            UPDATE notes SET
                title = $3,
                content = $4,
                image_url = $5,
                updated_at = $6
            WHERE note_id = $1 AND user_id = $2
            "#,
        )
        .bind(note.note_id.as_uuid())
        .bind(note.user_id.as_uuid())
        .bind(note.title.as_str())
        .bind(note.content.as_str())
        .bind(&note.image_url)
        .bind(note.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_owned(&self, note_id: &NoteId, owner: &UserId) -> NotesResult<bool> {
        let deleted = sqlx::query("DELETE FROM notes WHERE note_id = $1 AND user_id = $2")
            .bind(note_id.as_uuid())
            .bind(owner.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct NoteRow {
    note_id: Uuid,
    title: String,
    content: String,
    image_url: Option<String>,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NoteRow {
    fn into_note(self) -> Note {
        Note {
            note_id: NoteId::from_uuid(self.note_id),
            title: NoteTitle::from_db(self.title),
            content: NoteContent::from_db(self.content),
            image_url: self.image_url,
            user_id: UserId::from_uuid(self.user_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
