use axum::{Router, routing::get};

use crate::AppState;

mod dto;
pub(crate) mod handlers;

pub use dto::{CreateNoteRequest, NoteDto, UpdateNoteRequest};
pub use handlers::{create_note, delete_note, get_note, list_notes, update_note};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notes).post(create_note))
        .route("/{id}", get(get_note).put(update_note).delete(delete_note))
}
