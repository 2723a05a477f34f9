//! Notes Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::NotesConfig;
use crate::domain::repository::NoteRepository;
use crate::infra::postgres::PgNotesRepository;
use crate::presentation::handlers::{self, NotesAppState};

/// Create the Notes router with PostgreSQL repository
pub fn notes_router(repo: PgNotesRepository, config: NotesConfig) -> Router {
    notes_router_generic(repo, config)
}

/// Create a generic Notes router for any repository implementation
pub fn notes_router_generic<R>(repo: R, config: NotesConfig) -> Router
where
    R: NoteRepository + Clone + Send + Sync + 'static,
{
    let state = NotesAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_notes::<R>).post(handlers::create_note::<R>),
        )
        .route(
            "/{id}",
            get(handlers::get_note::<R>)
                .put(handlers::update_note::<R>)
                .delete(handlers::delete_note::<R>),
        )
        .with_state(state)
}
