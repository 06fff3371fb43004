use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::store::StoreError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// The request has the wrong shape: missing fields, unreadable JSON.
    BadRequest(String),
    /// An extractor refused the request with its own status.
    Rejected(StatusCode, String),
    MalformedId,
    Validation(String),
    DuplicateKey,
    Db(sqlx::Error),
    NotFound(&'static str),
    UnknownEndpoint,
    Unauthorized(&'static str),
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Names every field flagged as missing, in the order given.
    pub fn missing_fields(fields: &[(&str, bool)]) -> Self {
        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, missing)| *missing)
            .map(|(name, _)| *name)
            .collect();
        let noun = if missing.len() == 1 { "field" } else { "fields" };
        ApiError::BadRequest(format!("missing required {noun}: {}", missing.join(", ")))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_)
            | ApiError::MalformedId
            | ApiError::Validation(_)
            | ApiError::DuplicateKey => StatusCode::BAD_REQUEST,
            ApiError::Rejected(status, _) => *status,
            ApiError::NotFound(_) | ApiError::UnknownEndpoint => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Db(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::Rejected(_, msg)
            | ApiError::Validation(msg) => msg.clone(),
            ApiError::MalformedId => "malformatted id".to_string(),
            ApiError::DuplicateKey => "Duplicate key error".to_string(),
            ApiError::Db(_) => "Database server error".to_string(),
            ApiError::NotFound(resource) => format!("{resource} not found"),
            ApiError::UnknownEndpoint => "unknown endpoint".to_string(),
            ApiError::Unauthorized(msg) => msg.to_string(),
            ApiError::Internal(_) => "internal server error".to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MalformedId(raw) => {
                tracing::debug!(id = %raw, "malformatted id");
                ApiError::MalformedId
            }
            StoreError::Validation(msg) => ApiError::Validation(msg),
            StoreError::Duplicate(detail) => {
                tracing::debug!("duplicate key: {detail}");
                ApiError::DuplicateKey
            }
            StoreError::Server(e) => ApiError::Db(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Db(e) => tracing::error!("db error: {e}"),
            ApiError::Internal(msg) => tracing::error!("internal error: {msg}"),
            other => tracing::info!("request failed: {}", other.message()),
        }

        (
            self.status(),
            Json(ErrorBody {
                error: self.message(),
            }),
        )
            .into_response()
    }
}

/// Fallback for requests no route matches.
pub async fn unknown_endpoint() -> ApiError {
    ApiError::UnknownEndpoint
}
