//! Resource store: the persistence boundary behind every controller.
//!
//! Each resource module declares its own store contract (`BlogRepo`,
//! `UserRepo`, `NoteRepo`) together with the Postgres implementation. The
//! [`Store`] trait bundles them with the lifecycle hooks so the application
//! can hold a single `Arc<dyn Store>` handle.

use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};
use uuid::Uuid;

use crate::{blogs::repo::BlogRepo, notes::repo::NoteRepo, users::repo::UserRepo};

pub mod memory;

pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("malformatted id `{0}`")]
    MalformedId(String),

    #[error("{0}")]
    Validation(String),

    #[error("duplicate key: {0}")]
    Duplicate(String),

    #[error("database server error: {0}")]
    Server(#[source] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StoreError::Duplicate(db_err.message().to_string());
            }
            // 23502: not_null_violation
            if db_err.is_check_violation()
                || db_err.is_foreign_key_violation()
                || db_err.code().as_deref() == Some("23502")
            {
                return StoreError::Validation(db_err.message().to_string());
            }
        }
        StoreError::Server(err)
    }
}

/// Parses a record id. Anything that is not a UUID is a malformed id rather
/// than an unknown one.
pub fn parse_id(raw: &str) -> StoreResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| StoreError::MalformedId(raw.to_string()))
}

/// Collects schema problems into a single validation failure.
pub(crate) fn validation(model: &str, problems: Vec<String>) -> StoreResult<()> {
    if problems.is_empty() {
        return Ok(());
    }
    Err(StoreError::Validation(format!(
        "{model} validation failed: {}",
        problems.join(", ")
    )))
}

#[async_trait]
pub trait Store: BlogRepo + UserRepo + NoteRepo + Send + Sync {
    async fn ping(&self) -> StoreResult<()>;

    async fn close(&self);
}

#[derive(Debug, Clone)]
pub struct PgStore {
    pub(crate) pool: PgPool,
}

impl PgStore {
    /// Connects to Postgres and applies pending migrations.
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(sqlx::Error::from)?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
