//! HTTP Handlers
//!
//! Every handler authenticates the bearer token first; the user id it
//! yields scopes all store operations.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use chrono::Utc;
use std::sync::Arc;

use platform::bearer::extract_bearer_token;

use crate::application::config::NotesConfig;
use crate::application::{
    CreateNoteInput, CreateNoteUseCase, DeleteNoteUseCase, GetNoteUseCase, ListNotesUseCase,
    UpdateNoteInput, UpdateNoteUseCase,
};
use crate::domain::repository::NoteRepository;
use crate::error::{NotesError, NotesResult};
use crate::presentation::dto::{
    CreateNoteRequest, DeleteNoteResponse, NoteDto, UpdateNoteRequest,
};
use kernel::id::{NoteId, UserId};

/// Shared state for notes handlers
#[derive(Clone)]
pub struct NotesAppState<R>
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<NotesConfig>,
}

/// GET /api/notes
pub async fn list_notes<R>(
    State(state): State<NotesAppState<R>>,
    headers: HeaderMap,
) -> NotesResult<Json<Vec<NoteDto>>>
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    let user_id = authenticate(&headers, &state.config)?;

    let use_case = ListNotesUseCase::new(state.repo.clone());
    let notes = use_case.execute(&user_id).await?;

    Ok(Json(notes.iter().map(NoteDto::from).collect()))
}

/// GET /api/notes/{id}
pub async fn get_note<R>(
    State(state): State<NotesAppState<R>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> NotesResult<Json<NoteDto>>
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    let user_id = authenticate(&headers, &state.config)?;
    let note_id = parse_note_id(&id)?;

    let use_case = GetNoteUseCase::new(state.repo.clone());
    let note = use_case.execute(&user_id, &note_id).await?;

    Ok(Json(NoteDto::from(&note)))
}

/// POST /api/notes
pub async fn create_note<R>(
    State(state): State<NotesAppState<R>>,
    headers: HeaderMap,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> NotesResult<impl IntoResponse>
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    let user_id = authenticate(&headers, &state.config)?;
    let req = require_json(payload)?;

    let use_case = CreateNoteUseCase::new(state.repo.clone());

    let input = CreateNoteInput {
        title: req.title,
        content: req.content,
        image_url: req.image_url,
    };

    let note = use_case.execute(&user_id, input).await?;

    Ok((StatusCode::CREATED, Json(NoteDto::from(&note))))
}

/// PUT /api/notes/{id}
pub async fn update_note<R>(
    State(state): State<NotesAppState<R>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> NotesResult<Json<NoteDto>>
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    let user_id = authenticate(&headers, &state.config)?;
    let note_id = parse_note_id(&id)?;
    let req = require_json(payload)?;

    let use_case = UpdateNoteUseCase::new(state.repo.clone());

    let input = UpdateNoteInput {
        title: req.title,
        content: req.content,
        image_url: req.image_url,
    };

    let note = use_case.execute(&user_id, &note_id, input).await?;

    Ok(Json(NoteDto::from(&note)))
}

/// DELETE /api/notes/{id}
pub async fn delete_note<R>(
    State(state): State<NotesAppState<R>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> NotesResult<Json<DeleteNoteResponse>>
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    let user_id = authenticate(&headers, &state.config)?;
    let note_id = parse_note_id(&id)?;

    let use_case = DeleteNoteUseCase::new(state.repo.clone());
    use_case.execute(&user_id, &note_id).await?;

    Ok(Json(DeleteNoteResponse::new()))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Authenticate the request's bearer token, yielding the user identity
///
/// Missing-token and invalid-token are distinct variants (both 401) so
/// the transport layer can tell them apart in logs; business logic never
/// branches on the difference.
pub(crate) fn authenticate(headers: &HeaderMap, config: &NotesConfig) -> NotesResult<UserId> {
    let token = extract_bearer_token(headers).ok_or(NotesError::MissingToken)?;

    let subject = platform::token::verify(
        &config.token_secret,
        &token,
        Utc::now().timestamp_millis(),
    )?;

    UserId::parse_str(&subject).map_err(|_| NotesError::InvalidToken)
}

/// Parse a note id path parameter
///
/// An id that is not even a well-formed UUID cannot name a note; it gets
/// the same 404 as an unknown one.
pub(crate) fn parse_note_id(raw: &str) -> NotesResult<NoteId> {
    NoteId::parse_str(raw).map_err(|_| NotesError::NoteNotFound)
}

/// Unwrap a JSON body, converting extractor rejections into 400s with the
/// standard `{"error": ...}` shape
fn require_json<T>(payload: Result<Json<T>, JsonRejection>) -> NotesResult<T> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(NotesError::Validation(rejection.body_text())),
    }
}
