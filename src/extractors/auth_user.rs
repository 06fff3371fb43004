use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{header, request::Parts},
};
use jsonwebtoken::{Algorithm, Validation, decode};
use uuid::Uuid;

use crate::{AppState, Claims, error::ApiError};

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthorized("token missing"))?;
        let token = auth
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized("token missing"))?;
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        let data = decode::<Claims>(token, &state.jwt_dec, &validation)
            .map_err(|_| ApiError::Unauthorized("token invalid"))?;

        let user_id =
            Uuid::parse_str(&data.claims.sub).map_err(|_| ApiError::Unauthorized("token invalid"))?;

        Ok(AuthUser {
            id: user_id,
            username: data.claims.username,
        })
    }
}

/// No `Authorization` header means anonymous; a header that does not verify
/// is still rejected.
impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        if !parts.headers.contains_key(header::AUTHORIZATION) {
            return Ok(None);
        }
        <AuthUser as FromRequestParts<AppState>>::from_request_parts(parts, state)
            .await
            .map(Some)
    }
}
