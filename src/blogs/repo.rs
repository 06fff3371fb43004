use async_trait::async_trait;
use uuid::Uuid;

use crate::store::{PgStore, StoreResult, parse_id, validation};

pub const DEFAULT_AUTHOR: &str = "Unknown Author";

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    /// Revision counter, bumped on every update. Never leaves the service.
    pub version: i32,
}

/// A blog that passed the controller's required-field check but has not been
/// defaulted or persisted yet.
#[derive(Debug, Clone, Default)]
pub struct NewBlog {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: Option<i64>,
}

impl NewBlog {
    pub fn validate(&self) -> StoreResult<()> {
        let mut problems = Vec::new();
        if self.title.trim().is_empty() {
            problems.push("title: is required".to_string());
        }
        if self.url.trim().is_empty() {
            problems.push("url: is required".to_string());
        }
        if let Some(likes) = self.likes {
            if likes < 0 {
                problems.push(format!("likes: ({likes}) is less than minimum allowed value (0)"));
            }
        }
        validation("Blog", problems)
    }

    /// Applies schema defaults and assigns the id.
    pub fn into_blog(self, id: Uuid) -> Blog {
        Blog {
            id,
            title: self.title,
            author: self.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            url: self.url,
            likes: self.likes.unwrap_or(0),
            version: 0,
        }
    }
}

/// Partial replacement. `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct BlogUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl BlogUpdate {
    pub fn validate(&self) -> StoreResult<()> {
        let mut problems = Vec::new();
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            problems.push("title: must not be empty".to_string());
        }
        if self.url.as_deref().is_some_and(|u| u.trim().is_empty()) {
            problems.push("url: must not be empty".to_string());
        }
        if let Some(likes) = self.likes {
            if likes < 0 {
                problems.push(format!("likes: ({likes}) is less than minimum allowed value (0)"));
            }
        }
        validation("Blog", problems)
    }

    pub fn apply(self, blog: &mut Blog) {
        if let Some(title) = self.title {
            blog.title = title;
        }
        if let Some(author) = self.author {
            blog.author = author;
        }
        if let Some(url) = self.url {
            blog.url = url;
        }
        if let Some(likes) = self.likes {
            blog.likes = likes;
        }
        blog.version += 1;
    }
}

#[async_trait]
pub trait BlogRepo: Send + Sync {
    async fn list_blogs(&self) -> StoreResult<Vec<Blog>>;

    async fn find_blog(&self, id: &str) -> StoreResult<Option<Blog>>;

    async fn insert_blog(&self, blog: NewBlog) -> StoreResult<Blog>;

    /// Returns `None` when no blog has this id.
    async fn update_blog(&self, id: &str, update: BlogUpdate) -> StoreResult<Option<Blog>>;

    /// Deleting an unknown id is a no-op.
    async fn delete_blog(&self, id: &str) -> StoreResult<()>;
}

#[async_trait]
impl BlogRepo for PgStore {
    async fn list_blogs(&self) -> StoreResult<Vec<Blog>> {
        let rows = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, author, url, likes, version
            FROM blogs
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_blog(&self, id: &str) -> StoreResult<Option<Blog>> {
        let id = parse_id(id)?;
        let row = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, author, url, likes, version
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn insert_blog(&self, blog: NewBlog) -> StoreResult<Blog> {
        blog.validate()?;
        let blog = blog.into_blog(Uuid::new_v4());

        let row = sqlx::query_as::<_, Blog>(
            r#"
            INSERT INTO blogs (id, title, author, url, likes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, author, url, likes, version
            "#,
        )
        .bind(blog.id)
        .bind(&blog.title)
        .bind(&blog.author)
        .bind(&blog.url)
        .bind(blog.likes)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update_blog(&self, id: &str, update: BlogUpdate) -> StoreResult<Option<Blog>> {
        let id = parse_id(id)?;
        update.validate()?;

        let row = sqlx::query_as::<_, Blog>(
            r#"
            UPDATE blogs
            SET title = COALESCE($2, title),
                author = COALESCE($3, author),
                url = COALESCE($4, url),
                likes = COALESCE($5, likes),
                version = version + 1
            WHERE id = $1
            RETURNING id, title, author, url, likes, version
            "#,
        )
        .bind(id)
        .bind(update.title)
        .bind(update.author)
        .bind(update.url)
        .bind(update.likes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete_blog(&self, id: &str) -> StoreResult<()> {
        let id = parse_id(id)?;
        sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    fn new_blog() -> NewBlog {
        NewBlog {
            title: "Go To Statement Considered Harmful".to_string(),
            author: None,
            url: "http://www.u.arizona.edu/~rubinson/copyright_violations/Go_To_Considered_Harmful.html"
                .to_string(),
            likes: None,
        }
    }

    #[test]
    fn into_blog_fills_defaults() {
        let id = Uuid::new_v4();
        let blog = new_blog().into_blog(id);

        assert_eq!(blog.id, id);
        assert_eq!(blog.author, DEFAULT_AUTHOR);
        assert_eq!(blog.likes, 0);
        assert_eq!(blog.version, 0);
    }

    #[test]
    fn negative_likes_fail_validation() {
        let blog = NewBlog {
            likes: Some(-1),
            ..new_blog()
        };

        let Err(StoreError::Validation(message)) = blog.validate() else {
            panic!("expected a validation failure");
        };
        assert!(message.starts_with("Blog validation failed"));
        assert!(message.contains("likes"));
    }

    #[test]
    fn update_rejects_blank_title_and_keeps_missing_fields() {
        let update = BlogUpdate {
            title: Some("   ".to_string()),
            ..BlogUpdate::default()
        };
        assert!(matches!(update.validate(), Err(StoreError::Validation(m)) if m.contains("title")));

        let mut blog = new_blog().into_blog(Uuid::new_v4());
        BlogUpdate {
            likes: Some(3),
            ..BlogUpdate::default()
        }
        .apply(&mut blog);

        assert_eq!(blog.likes, 3);
        assert_eq!(blog.title, "Go To Statement Considered Harmful");
        assert_eq!(blog.version, 1);
    }
}
