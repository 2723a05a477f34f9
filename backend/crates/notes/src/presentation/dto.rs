//! API DTOs (Data Transfer Objects)
//!
//! Ids cross the boundary as strings; timestamps as ISO-8601 UTC with a
//! trailing `Z` (microsecond precision). `imageUrl` is always present in
//! the note shape, null when unset.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Note;

/// Serialize a timestamp the way clients expect it
fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

// ============================================================================
// Requests
// ============================================================================

/// Request for POST /api/notes
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

/// Request for PUT /api/notes/{id}
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Public note shape
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Note> for NoteDto {
    fn from(note: &Note) -> Self {
        Self {
            id: note.note_id.to_string(),
            title: note.title.as_str().to_string(),
            content: note.content.as_str().to_string(),
            image_url: note.image_url.clone(),
            user_id: note.user_id.to_string(),
            created_at: format_timestamp(note.created_at),
            updated_at: format_timestamp(note.updated_at),
        }
    }
}

/// Response for DELETE /api/notes/{id}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNoteResponse {
    pub success: bool,
    pub message: String,
}

impl DeleteNoteResponse {
    pub fn new() -> Self {
        Self {
            success: true,
            message: "Note deleted successfully".to_string(),
        }
    }
}

impl Default for DeleteNoteResponse {
    fn default() -> Self {
        Self::new()
    }
}
