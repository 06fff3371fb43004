use axum::{Json, extract::State, http::StatusCode};
use jsonwebtoken::{Header, encode};
use time::OffsetDateTime;

use crate::{
    AppState, Claims,
    auth::{
        http::{LoginRequest, LoginResponse},
        password,
    },
    error::{ApiError, ApiResult},
    extractors::json::ApiJson,
    users::repo::UserRepo,
};

const TOKEN_TTL_SECS: i64 = 60 * 60;

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Bearer token for the user", body = LoginResponse),
        (status = 400, description = "Invalid login payload", body = crate::error::ErrorBody),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<(StatusCode, Json<LoginResponse>)> {
    let user = state
        .store
        .find_user_by_username(request.username.trim())
        .await?;

    let user = match user {
        Some(user) if password::verify_password(&request.password, &user.password_hash)? => user,
        _ => return Err(ApiError::Unauthorized("invalid username or password")),
    };

    let now = OffsetDateTime::now_utc().unix_timestamp();
    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        iat: now,
        exp: now + TOKEN_TTL_SECS,
    };

    let token = encode(&Header::default(), &claims, &state.jwt_enc)
        .map_err(|e| ApiError::Internal(format!("sign token: {e}")))?;
    tracing::debug!(user_id = %user.id, "issued token");

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            token,
            username: user.username,
            name: user.name,
        }),
    ))
}
