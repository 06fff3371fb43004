use axum::{Router, routing::get};

use crate::AppState;

mod dto;
pub(crate) mod handlers;

pub use dto::{BlogDto, CreateBlogRequest, UpdateBlogRequest};
pub use handlers::{create_blog, delete_blog, get_blog, list_blogs, update_blog};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_blogs).post(create_blog))
        .route("/{id}", get(get_blog).put(update_blog).delete(delete_blog))
}
