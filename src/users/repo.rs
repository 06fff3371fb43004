use async_trait::async_trait;
use uuid::Uuid;

use crate::store::{PgStore, StoreResult, validation};

pub const MIN_USERNAME_LEN: usize = 3;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub version: i32,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
}

impl NewUser {
    pub fn validate(&self) -> StoreResult<()> {
        let mut problems = Vec::new();
        if self.username.chars().count() < MIN_USERNAME_LEN {
            problems.push(format!(
                "username: `{}` is shorter than the minimum allowed length ({MIN_USERNAME_LEN})",
                self.username
            ));
        }
        if self.password_hash.is_empty() {
            problems.push("passwordHash: is required".to_string());
        }
        validation("User", problems)
    }

    pub fn into_user(self, id: Uuid) -> User {
        User {
            id,
            username: self.username,
            name: self.name.unwrap_or_default(),
            password_hash: self.password_hash,
            version: 0,
        }
    }
}

#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Fails with `StoreError::Duplicate` when the username is taken.
    async fn insert_user(&self, user: NewUser) -> StoreResult<User>;
}

#[async_trait]
impl UserRepo for PgStore {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, name, password_hash, version
            FROM users
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let row = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, name, password_hash, version
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        user.validate()?;
        let user = user.into_user(Uuid::new_v4());

        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, name, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, name, password_hash, version
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.name)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
