use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    auth::password::{self, MIN_PASSWORD_LEN},
    error::{ApiError, ApiResult},
    extractors::json::{ApiJson, non_blank},
    users::repo::{NewUser, UserRepo},
};

use super::dto::{CreateUserRequest, UserDto};

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [UserDto]),
        (status = 500, description = "Database server error", body = crate::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<Vec<UserDto>>)> {
    let users = state.store.list_users().await?;
    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(UserDto::from).collect()),
    ))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Missing fields, invalid user or duplicate username", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let (username, password) = match (non_blank(request.username), request.password) {
        (Some(username), Some(password)) if !password.is_empty() => (username, password),
        (username, password) => {
            return Err(ApiError::missing_fields(&[
                ("username", username.is_none()),
                ("password", password.as_deref().is_none_or(str::is_empty)),
            ]));
        }
    };

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }

    let password_hash = password::hash_password(&password)?;
    let user = state
        .store
        .insert_user(NewUser {
            username: username.trim().to_string(),
            name: request.name,
            password_hash,
        })
        .await?;
    tracing::debug!(user_id = %user.id, "user created");

    Ok((StatusCode::CREATED, Json(user.into())))
}
