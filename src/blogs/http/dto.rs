use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    blogs::repo::{Blog, BlogUpdate, NewBlog},
    error::{ApiError, ApiResult},
    extractors::json::non_blank,
};

/// Untrusted create payload; every field may be absent.
#[derive(Deserialize, ToSchema)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl CreateBlogRequest {
    pub fn into_new_blog(self) -> ApiResult<NewBlog> {
        match (non_blank(self.title), non_blank(self.url)) {
            (Some(title), Some(url)) => Ok(NewBlog {
                title,
                author: self.author,
                url,
                likes: self.likes,
            }),
            (title, url) => Err(ApiError::missing_fields(&[
                ("title", title.is_none()),
                ("url", url.is_none()),
            ])),
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl From<UpdateBlogRequest> for BlogUpdate {
    fn from(request: UpdateBlogRequest) -> Self {
        BlogUpdate {
            title: request.title,
            author: request.author,
            url: request.url,
            likes: request.likes,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct BlogDto {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
}

impl From<Blog> for BlogDto {
    fn from(blog: Blog) -> Self {
        BlogDto {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
        }
    }
}
