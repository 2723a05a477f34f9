//! Unit tests for the notes crate

#[cfg(test)]
mod value_object_tests {
    use crate::domain::value_objects::{NoteContent, NoteTitle};

    #[test]
    fn test_title_trimmed() {
        let title = NoteTitle::new("  Shopping  ").unwrap();
        assert_eq!(title.as_str(), "Shopping");
    }

    #[test]
    fn test_title_rejects_empty_and_whitespace() {
        assert!(NoteTitle::new("").is_err());
        assert!(NoteTitle::new("  ").is_err());
        assert!(NoteTitle::new("\t\n").is_err());
    }

    #[test]
    fn test_title_rejects_too_long() {
        assert!(NoteTitle::new("x".repeat(201)).is_err());
        assert!(NoteTitle::new("x".repeat(200)).is_ok());
    }

    #[test]
    fn test_content_trimmed() {
        let content = NoteContent::new("  milk\n").unwrap();
        assert_eq!(content.as_str(), "milk");
    }

    #[test]
    fn test_content_rejects_empty_and_whitespace() {
        assert!(NoteContent::new("").is_err());
        assert!(NoteContent::new("   ").is_err());
    }

    #[test]
    fn test_single_character_is_valid() {
        assert!(NoteTitle::new("x").is_ok());
        assert!(NoteContent::new("y").is_ok());
    }
}

#[cfg(test)]
mod entity_tests {
    use crate::domain::entities::Note;
    use crate::domain::value_objects::{NoteContent, NoteTitle};
    use kernel::id::UserId;

    fn note(owner: UserId) -> Note {
        Note::new(
            owner,
            NoteTitle::new("Shopping").unwrap(),
            NoteContent::new("milk").unwrap(),
            None,
        )
    }

    #[test]
    fn test_new_note_timestamps_equal() {
        let note = note(UserId::new());
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn test_new_notes_get_fresh_ids() {
        let owner = UserId::new();
        assert_ne!(note(owner).note_id, note(owner).note_id);
    }

    #[test]
    fn test_apply_update_refreshes_updated_at_only() {
        let owner = UserId::new();
        let mut note = note(owner);

        let id_before = note.note_id;
        let created_before = note.created_at;
        let updated_before = note.updated_at;

        note.apply_update(
            NoteTitle::new("Groceries").unwrap(),
            NoteContent::new("milk and eggs").unwrap(),
            Some("https://example.com/list.png".to_string()),
        );

        assert_eq!(note.note_id, id_before);
        assert_eq!(note.created_at, created_before);
        assert_eq!(note.user_id, owner);
        assert!(note.updated_at >= updated_before);

        assert_eq!(note.title.as_str(), "Groceries");
        assert_eq!(note.content.as_str(), "milk and eggs");
        assert_eq!(
            note.image_url.as_deref(),
            Some("https://example.com/list.png")
        );
    }

    #[test]
    fn test_apply_update_can_clear_image_url() {
        let mut note = Note::new(
            UserId::new(),
            NoteTitle::new("Shopping").unwrap(),
            NoteContent::new("milk").unwrap(),
            Some("https://example.com/a.png".to_string()),
        );

        note.apply_update(
            NoteTitle::new("Shopping").unwrap(),
            NoteContent::new("milk").unwrap(),
            None,
        );

        assert!(note.image_url.is_none());
    }
}

#[cfg(test)]
mod bearer_auth_tests {
    use axum::http::{HeaderMap, HeaderValue, header};
    use chrono::Utc;

    use crate::application::config::NotesConfig;
    use crate::error::NotesError;
    use crate::presentation::handlers::{authenticate, parse_note_id};
    use kernel::id::UserId;

    fn bearer_headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    fn signed_token(config: &NotesConfig, subject: &str, expires_at_ms: i64) -> String {
        platform::token::sign(&config.token_secret, subject, expires_at_ms)
    }

    #[test]
    fn test_authenticate_valid_token() {
        let config = NotesConfig::with_random_secret();
        let user_id = UserId::new();

        let token = signed_token(
            &config,
            &user_id.to_string(),
            Utc::now().timestamp_millis() + 60_000,
        );

        let authenticated = authenticate(&bearer_headers(&token), &config).unwrap();
        assert_eq!(authenticated, user_id);
    }

    #[test]
    fn test_authenticate_missing_header() {
        let config = NotesConfig::with_random_secret();
        let result = authenticate(&HeaderMap::new(), &config);
        assert!(matches!(result, Err(NotesError::MissingToken)));
    }

    #[test]
    fn test_authenticate_garbage_token() {
        let config = NotesConfig::with_random_secret();
        let result = authenticate(&bearer_headers("not-a-token"), &config);
        assert!(matches!(result, Err(NotesError::InvalidToken)));
    }

    #[test]
    fn test_authenticate_expired_token() {
        let config = NotesConfig::with_random_secret();
        let user_id = UserId::new();

        let token = signed_token(
            &config,
            &user_id.to_string(),
            Utc::now().timestamp_millis() - 1,
        );

        let result = authenticate(&bearer_headers(&token), &config);
        assert!(matches!(result, Err(NotesError::InvalidToken)));
    }

    #[test]
    fn test_authenticate_wrong_secret() {
        let config = NotesConfig::with_random_secret();
        let other = NotesConfig::with_random_secret();
        let user_id = UserId::new();

        let token = signed_token(
            &other,
            &user_id.to_string(),
            Utc::now().timestamp_millis() + 60_000,
        );

        let result = authenticate(&bearer_headers(&token), &config);
        assert!(matches!(result, Err(NotesError::InvalidToken)));
    }

    #[test]
    fn test_authenticate_non_uuid_subject() {
        let config = NotesConfig::with_random_secret();

        let token = signed_token(&config, "admin", Utc::now().timestamp_millis() + 60_000);

        let result = authenticate(&bearer_headers(&token), &config);
        assert!(matches!(result, Err(NotesError::InvalidToken)));
    }

    #[test]
    fn test_parse_note_id() {
        let id = kernel::id::NoteId::new();
        assert_eq!(parse_note_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_note_id_malformed_is_not_found() {
        // A malformed id is indistinguishable from an unknown one
        let result = parse_note_id("definitely-not-a-uuid");
        assert!(matches!(result, Err(NotesError::NoteNotFound)));
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::domain::entities::Note;
    use crate::domain::value_objects::{NoteContent, NoteTitle};
    use crate::presentation::dto::{DeleteNoteResponse, NoteDto};
    use kernel::id::UserId;

    fn note() -> Note {
        Note::new(
            UserId::new(),
            NoteTitle::new("Shopping").unwrap(),
            NoteContent::new("milk").unwrap(),
            None,
        )
    }

    #[test]
    fn test_note_dto_shape() {
        let note = note();
        let json = serde_json::to_value(NoteDto::from(&note)).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 7);
        assert_eq!(obj["id"], note.note_id.to_string());
        assert_eq!(obj["title"], "Shopping");
        assert_eq!(obj["content"], "milk");
        assert_eq!(obj["imageUrl"], serde_json::Value::Null);
        assert_eq!(obj["userId"], note.user_id.to_string());
    }

    #[test]
    fn test_note_dto_timestamps_are_utc_with_z() {
        let note = note();
        let dto = NoteDto::from(&note);

        assert!(dto.created_at.ends_with('Z'));
        assert!(dto.updated_at.ends_with('Z'));
        assert!(dto.created_at.contains('T'));

        // A fresh note serializes identical timestamps
        assert_eq!(dto.created_at, dto.updated_at);
    }

    #[test]
    fn test_create_request_camel_case() {
        let req: crate::presentation::dto::CreateNoteRequest = serde_json::from_str(
            r#"{"title":"Shopping","content":"milk","imageUrl":"https://example.com/a.png"}"#,
        )
        .unwrap();

        assert_eq!(req.image_url.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_create_request_image_optional() {
        let req: crate::presentation::dto::CreateNoteRequest =
            serde_json::from_str(r#"{"title":"Shopping","content":"milk"}"#).unwrap();
        assert!(req.image_url.is_none());
    }

    #[test]
    fn test_delete_response_shape() {
        let json = serde_json::to_value(DeleteNoteResponse::new()).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Note deleted successfully");
    }
}

#[cfg(test)]
mod error_tests {
    use axum::http::StatusCode;

    use crate::error::NotesError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            NotesError::Validation("Title is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            NotesError::NoteNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            NotesError::MissingToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            NotesError::InvalidToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            NotesError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_foreign_note_is_not_found_not_forbidden() {
        // Ownership must never leak through a distinct status code
        assert_ne!(NotesError::NoteNotFound.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            NotesError::NoteNotFound.to_string(),
            "Note not found"
        );
    }

    #[test]
    fn test_token_error_collapses_to_invalid_token() {
        use platform::token::TokenError;

        for err in [
            TokenError::Malformed,
            TokenError::BadSignature,
            TokenError::Expired,
        ] {
            let notes_err: NotesError = err.into();
            assert!(matches!(notes_err, NotesError::InvalidToken));
        }
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::NotesConfig;

    #[test]
    fn test_default_secret_is_zeroed() {
        assert_eq!(NotesConfig::default().token_secret, [0u8; 32]);
    }

    #[test]
    fn test_with_random_secret() {
        let a = NotesConfig::with_random_secret();
        let b = NotesConfig::with_random_secret();
        assert_ne!(a.token_secret, [0u8; 32]);
        assert_ne!(a.token_secret, b.token_secret);
    }
}
