use async_trait::async_trait;
use uuid::Uuid;

use crate::store::{PgStore, StoreResult, parse_id, validation};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Note {
    pub id: Uuid,
    pub content: String,
    pub important: bool,
    pub user_id: Option<Uuid>,
    pub version: i32,
}

#[derive(Debug, Clone)]
pub struct NewNote {
    pub content: String,
    pub important: Option<bool>,
    pub user_id: Option<Uuid>,
}

impl NewNote {
    pub fn validate(&self) -> StoreResult<()> {
        let mut problems = Vec::new();
        if self.content.trim().is_empty() {
            problems.push("content: is required".to_string());
        }
        validation("Note", problems)
    }

    pub fn into_note(self, id: Uuid) -> Note {
        Note {
            id,
            content: self.content,
            important: self.important.unwrap_or(false),
            user_id: self.user_id,
            version: 0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoteUpdate {
    pub content: Option<String>,
    pub important: Option<bool>,
}

impl NoteUpdate {
    pub fn validate(&self) -> StoreResult<()> {
        let mut problems = Vec::new();
        if self.content.as_deref().is_some_and(|c| c.trim().is_empty()) {
            problems.push("content: must not be empty".to_string());
        }
        validation("Note", problems)
    }

    pub fn apply(self, note: &mut Note) {
        if let Some(content) = self.content {
            note.content = content;
        }
        if let Some(important) = self.important {
            note.important = important;
        }
        note.version += 1;
    }
}

#[async_trait]
pub trait NoteRepo: Send + Sync {
    async fn list_notes(&self) -> StoreResult<Vec<Note>>;

    async fn find_note(&self, id: &str) -> StoreResult<Option<Note>>;

    async fn insert_note(&self, note: NewNote) -> StoreResult<Note>;

    async fn update_note(&self, id: &str, update: NoteUpdate) -> StoreResult<Option<Note>>;

    async fn delete_note(&self, id: &str) -> StoreResult<()>;
}

#[async_trait]
impl NoteRepo for PgStore {
    async fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let rows = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, content, important, user_id, version
            FROM notes
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_note(&self, id: &str) -> StoreResult<Option<Note>> {
        let id = parse_id(id)?;
        let row = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, content, important, user_id, version
            FROM notes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn insert_note(&self, note: NewNote) -> StoreResult<Note> {
        note.validate()?;
        let note = note.into_note(Uuid::new_v4());

        let row = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (id, content, important, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, important, user_id, version
            "#,
        )
        .bind(note.id)
        .bind(&note.content)
        .bind(note.important)
        .bind(note.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update_note(&self, id: &str, update: NoteUpdate) -> StoreResult<Option<Note>> {
        let id = parse_id(id)?;
        update.validate()?;

        let row = sqlx::query_as::<_, Note>(
            r#"
            UPDATE notes
            SET content = COALESCE($2, content),
                important = COALESCE($3, important),
                version = version + 1
            WHERE id = $1
            RETURNING id, content, important, user_id, version
            "#,
        )
        .bind(id)
        .bind(update.content)
        .bind(update.important)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete_note(&self, id: &str) -> StoreResult<()> {
        let id = parse_id(id)?;
        sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
