use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::notes::repo::{Note, NoteUpdate};

#[derive(Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    pub content: Option<String>,
    pub important: Option<bool>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    pub content: Option<String>,
    pub important: Option<bool>,
}

impl From<UpdateNoteRequest> for NoteUpdate {
    fn from(request: UpdateNoteRequest) -> Self {
        NoteUpdate {
            content: request.content,
            important: request.important,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct NoteDto {
    pub id: Uuid,
    pub content: String,
    pub important: bool,
    /// Id of the user who created the note, if it was created with credentials.
    pub user: Option<Uuid>,
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        NoteDto {
            id: note.id,
            content: note.content,
            important: note.important,
            user: note.user_id,
        }
    }
}
