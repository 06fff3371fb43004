use std::sync::Arc;

use jsonwebtoken::{DecodingKey, EncodingKey};
use serde::{Deserialize, Serialize};

use crate::store::Store;

pub mod app;
pub mod auth;
pub mod blogs;
pub mod config;
pub mod core;
pub mod error;
mod extractors;
pub mod notes;
pub mod store;
pub mod users;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub jwt_enc: EncodingKey,
    pub jwt_dec: DecodingKey,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, secret: &str) -> Self {
        Self {
            store,
            jwt_enc: EncodingKey::from_secret(secret.as_bytes()),
            jwt_dec: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Claims {
    sub: String, // user_id
    username: String,
    iat: i64,
    exp: i64,
}
