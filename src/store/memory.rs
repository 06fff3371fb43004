//! In-process store used when no database is configured, and by the tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    blogs::repo::{Blog, BlogRepo, BlogUpdate, NewBlog},
    notes::repo::{NewNote, Note, NoteRepo, NoteUpdate},
    users::repo::{NewUser, User, UserRepo},
};

use super::{Store, StoreError, StoreResult, parse_id};

/// Collections keep insertion order, which is also the listing order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blogs: RwLock<Vec<Blog>>,
    users: RwLock<Vec<User>>,
    notes: RwLock<Vec<Note>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogRepo for MemoryStore {
    async fn list_blogs(&self) -> StoreResult<Vec<Blog>> {
        Ok(self.blogs.read().await.clone())
    }

    async fn find_blog(&self, id: &str) -> StoreResult<Option<Blog>> {
        let id = parse_id(id)?;
        let blogs = self.blogs.read().await;
        Ok(blogs.iter().find(|blog| blog.id == id).cloned())
    }

    async fn insert_blog(&self, blog: NewBlog) -> StoreResult<Blog> {
        blog.validate()?;
        let blog = blog.into_blog(Uuid::new_v4());
        self.blogs.write().await.push(blog.clone());
        Ok(blog)
    }

    async fn update_blog(&self, id: &str, update: BlogUpdate) -> StoreResult<Option<Blog>> {
        let id = parse_id(id)?;
        update.validate()?;

        let mut blogs = self.blogs.write().await;
        let Some(blog) = blogs.iter_mut().find(|blog| blog.id == id) else {
            return Ok(None);
        };
        update.apply(blog);
        Ok(Some(blog.clone()))
    }

    async fn delete_blog(&self, id: &str) -> StoreResult<()> {
        let id = parse_id(id)?;
        self.blogs.write().await.retain(|blog| blog.id != id);
        Ok(())
    }
}

#[async_trait]
impl UserRepo for MemoryStore {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.username == username).cloned())
    }

    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        user.validate()?;

        let mut users = self.users.write().await;
        if users.iter().any(|existing| existing.username == user.username) {
            return Err(StoreError::Duplicate(format!(
                "username `{}` already exists",
                user.username
            )));
        }
        let user = user.into_user(Uuid::new_v4());
        users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl NoteRepo for MemoryStore {
    async fn list_notes(&self) -> StoreResult<Vec<Note>> {
        Ok(self.notes.read().await.clone())
    }

    async fn find_note(&self, id: &str) -> StoreResult<Option<Note>> {
        let id = parse_id(id)?;
        let notes = self.notes.read().await;
        Ok(notes.iter().find(|note| note.id == id).cloned())
    }

    async fn insert_note(&self, note: NewNote) -> StoreResult<Note> {
        note.validate()?;
        let note = note.into_note(Uuid::new_v4());
        self.notes.write().await.push(note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: &str, update: NoteUpdate) -> StoreResult<Option<Note>> {
        let id = parse_id(id)?;
        update.validate()?;

        let mut notes = self.notes.write().await;
        let Some(note) = notes.iter_mut().find(|note| note.id == id) else {
            return Ok(None);
        };
        update.apply(note);
        Ok(Some(note.clone()))
    }

    async fn delete_note(&self, id: &str) -> StoreResult<()> {
        let id = parse_id(id)?;
        self.notes.write().await.retain(|note| note.id != id);
        Ok(())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn close(&self) {
        tracing::debug!("in-memory store closed");
    }
}
