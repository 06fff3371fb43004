use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// `Json` whose rejection is reported through [`ApiError`], so unreadable
/// bodies still get a JSON `{ "error": ... }` response. Syntax and type
/// errors are a 400; a missing content type or an oversized body keeps the
/// rejection's own status.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                    ApiError::BadRequest(rejection.body_text())
                }
                other => ApiError::Rejected(other.status(), other.body_text()),
            })?;
        Ok(ApiJson(value))
    }
}

/// `Path` whose rejection becomes a malformed id. Record ids are the only
/// path parameters, and one that cannot even be decoded is never valid.
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                tracing::debug!("path rejected: {}", rejection.body_text());
                ApiError::MalformedId
            })?;
        Ok(ApiPath(value))
    }
}

/// Treats absent and blank strings alike.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
