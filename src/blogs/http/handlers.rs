use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::{
    AppState,
    blogs::repo::BlogRepo,
    error::{ApiError, ApiResult},
    extractors::json::{ApiJson, ApiPath},
};

use super::dto::{BlogDto, CreateBlogRequest, UpdateBlogRequest};

#[utoipa::path(
    get,
    path = "/api/blogs",
    responses(
        (status = 200, description = "All blogs", body = [BlogDto]),
        (status = 500, description = "Database server error", body = crate::error::ErrorBody)
    ),
    tag = "Blogs"
)]
pub async fn list_blogs(
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<Vec<BlogDto>>)> {
    let blogs = state.store.list_blogs().await?;
    Ok((
        StatusCode::OK,
        Json(blogs.into_iter().map(BlogDto::from).collect()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    params(
        ("id" = String, Path, description = "Blog id")
    ),
    responses(
        (status = 200, description = "Blog", body = BlogDto),
        (status = 400, description = "Malformatted id", body = crate::error::ErrorBody),
        (status = 404, description = "Blog not found", body = crate::error::ErrorBody)
    ),
    tag = "Blogs"
)]
pub async fn get_blog(
    State(state): State<AppState>,
    ApiPath(blog_id): ApiPath<String>,
) -> ApiResult<(StatusCode, Json<BlogDto>)> {
    let blog = state
        .store
        .find_blog(&blog_id)
        .await?
        .ok_or(ApiError::NotFound("blog"))?;
    Ok((StatusCode::OK, Json(blog.into())))
}

#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = CreateBlogRequest,
    responses(
        (status = 201, description = "Blog created", body = BlogDto),
        (status = 400, description = "Missing fields or invalid blog", body = crate::error::ErrorBody),
        (status = 500, description = "Database server error", body = crate::error::ErrorBody)
    ),
    tag = "Blogs"
)]
pub async fn create_blog(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateBlogRequest>,
) -> ApiResult<(StatusCode, Json<BlogDto>)> {
    let new_blog = request.into_new_blog()?;
    let blog = state.store.insert_blog(new_blog).await?;
    tracing::debug!(blog_id = %blog.id, "blog created");

    Ok((StatusCode::CREATED, Json(blog.into())))
}

#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    params(
        ("id" = String, Path, description = "Blog id")
    ),
    request_body = UpdateBlogRequest,
    responses(
        (status = 200, description = "Blog updated", body = BlogDto),
        (status = 400, description = "Malformatted id or invalid blog", body = crate::error::ErrorBody),
        (status = 404, description = "Blog not found", body = crate::error::ErrorBody),
        (status = 500, description = "Database server error", body = crate::error::ErrorBody)
    ),
    tag = "Blogs"
)]
pub async fn update_blog(
    State(state): State<AppState>,
    ApiPath(blog_id): ApiPath<String>,
    ApiJson(request): ApiJson<UpdateBlogRequest>,
) -> ApiResult<(StatusCode, Json<BlogDto>)> {
    let blog = state
        .store
        .update_blog(&blog_id, request.into())
        .await?
        .ok_or(ApiError::NotFound("blog"))?;

    Ok((StatusCode::OK, Json(blog.into())))
}

#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    params(
        ("id" = String, Path, description = "Blog id")
    ),
    responses(
        (status = 204, description = "Blog deleted, or it did not exist"),
        (status = 400, description = "Malformatted id", body = crate::error::ErrorBody),
        (status = 500, description = "Database server error", body = crate::error::ErrorBody)
    ),
    tag = "Blogs"
)]
pub async fn delete_blog(
    State(state): State<AppState>,
    ApiPath(blog_id): ApiPath<String>,
) -> ApiResult<StatusCode> {
    state.store.delete_blog(&blog_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
