use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    extractors::{
        auth_user::AuthUser,
        json::{ApiJson, ApiPath, non_blank},
    },
    notes::repo::{NewNote, NoteRepo},
};

use super::dto::{CreateNoteRequest, NoteDto, UpdateNoteRequest};

#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created", body = NoteDto),
        (status = 400, description = "Invalid note payload", body = crate::error::ErrorBody),
        (status = 401, description = "Credentials were sent but did not verify", body = crate::error::ErrorBody),
        (status = 500, description = "Database server error", body = crate::error::ErrorBody)
    ),
    security(
        (),
        ("bearer_auth" = [])
    ),
    tag = "Notes"
)]
pub async fn create_note(
    user: Option<AuthUser>,
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<NoteDto>)> {
    let Some(content) = non_blank(request.content) else {
        return Err(ApiError::missing_fields(&[("content", true)]));
    };

    let note = state
        .store
        .insert_note(NewNote {
            content,
            important: request.important,
            user_id: user.as_ref().map(|u| u.id),
        })
        .await?;
    if let Some(user) = user {
        tracing::debug!(note_id = %note.id, username = %user.username, "note created");
    }

    Ok((StatusCode::CREATED, Json(note.into())))
}

#[utoipa::path(
    get,
    path = "/api/notes",
    responses(
        (status = 200, description = "All notes", body = [NoteDto]),
        (status = 500, description = "Database server error", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn list_notes(
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<Vec<NoteDto>>)> {
    let notes = state.store.list_notes().await?;
    Ok((
        StatusCode::OK,
        Json(notes.into_iter().map(NoteDto::from).collect()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/notes/{id}",
    params(
        ("id" = String, Path, description = "Note id")
    ),
    responses(
        (status = 200, description = "Note", body = NoteDto),
        (status = 400, description = "Malformatted id", body = crate::error::ErrorBody),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn get_note(
    State(state): State<AppState>,
    ApiPath(note_id): ApiPath<String>,
) -> ApiResult<(StatusCode, Json<NoteDto>)> {
    let note = state.store.find_note(&note_id).await?;
    let note = note.ok_or(ApiError::NotFound("note"))?;
    Ok((StatusCode::OK, Json(note.into())))
}

#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    params(
        ("id" = String, Path, description = "Note id")
    ),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated", body = NoteDto),
        (status = 400, description = "Malformatted id or invalid note", body = crate::error::ErrorBody),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn update_note(
    State(state): State<AppState>,
    ApiPath(note_id): ApiPath<String>,
    ApiJson(request): ApiJson<UpdateNoteRequest>,
) -> ApiResult<(StatusCode, Json<NoteDto>)> {
    let note = state
        .store
        .update_note(&note_id, request.into())
        .await?
        .ok_or(ApiError::NotFound("note"))?;
    Ok((StatusCode::OK, Json(note.into())))
}

#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    params(
        ("id" = String, Path, description = "Note id")
    ),
    responses(
        (status = 204, description = "Note deleted, or it did not exist"),
        (status = 400, description = "Malformatted id", body = crate::error::ErrorBody),
        (status = 500, description = "Database server error", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn delete_note(
    State(state): State<AppState>,
    ApiPath(note_id): ApiPath<String>,
) -> ApiResult<StatusCode> {
    state.store.delete_note(&note_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
