#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use bloglist::{
    AppState,
    app::router::build_router,
    auth::password,
    blogs::repo::{Blog, BlogRepo, NewBlog},
    notes::repo::{Note, NoteRepo},
    store::MemoryStore,
    users::repo::{NewUser, User, UserRepo},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "integration-test-jwt-secret";

pub struct TestApp {
    app: Router,
    pub store: Arc<MemoryStore>,
}

pub fn initial_blogs() -> Vec<NewBlog> {
    vec![
        NewBlog {
            title: "La Quinta Montaña".to_string(),
            author: Some("Paulo Coelho".to_string()),
            url: "nomelase.com".to_string(),
            likes: Some(666),
        },
        NewBlog {
            title: "El Alquimista".to_string(),
            author: Some("Paulo Coelho".to_string()),
            url: "nomelase.com".to_string(),
            likes: Some(100),
        },
    ]
}

/// Well formed, but never assigned to any record.
pub fn non_existing_id() -> String {
    Uuid::new_v4().to_string()
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(store.clone(), TEST_JWT_SECRET);

        Self {
            app: build_router(state),
            store,
        }
    }

    pub async fn with_initial_blogs() -> Self {
        let app = Self::new();
        for blog in initial_blogs() {
            app.store
                .insert_blog(blog)
                .await
                .expect("failed to seed blog");
        }
        app
    }

    pub async fn blogs_in_db(&self) -> Vec<Blog> {
        self.store.list_blogs().await.expect("failed to list blogs")
    }

    pub async fn users_in_db(&self) -> Vec<User> {
        self.store.list_users().await.expect("failed to list users")
    }

    pub async fn notes_in_db(&self) -> Vec<Note> {
        self.store.list_notes().await.expect("failed to list notes")
    }

    pub async fn seed_user(&self, username: &str, password: &str) -> User {
        let password_hash = password::hash_password(password).expect("failed to hash password");
        self.store
            .insert_user(NewUser {
                username: username.to_string(),
                name: Some("Superuser".to_string()),
                password_hash,
            })
            .await
            .expect("failed to seed user")
    }

    pub async fn login(&self, username: &str, password: &str) -> String {
        let (status, body) = self
            .post_json(
                "/api/login",
                json!({
                    "username": username,
                    "password": password
                }),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        body.get("token")
            .and_then(Value::as_str)
            .expect("login response misses token")
            .to_string()
    }

    pub async fn post_json(
        &self,
        path: &str,
        body: Value,
        bearer: Option<&str>,
    ) -> (StatusCode, Value) {
        self.request_json(Method::POST, path, Some(body), bearer)
            .await
    }

    pub async fn put_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request_json(Method::PUT, path, Some(body), None).await
    }

    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        self.request_json(Method::GET, path, None, None).await
    }

    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let (status, _, bytes) = self.request(Method::GET, path, None, None).await;
        let text = String::from_utf8(bytes).expect("response is not valid utf-8 text");
        (status, text)
    }

    pub async fn delete(&self, path: &str) -> (StatusCode, Value) {
        self.request_json(Method::DELETE, path, None, None).await
    }

    pub async fn send(&self, method: Method, path: &str) -> (StatusCode, Value) {
        self.request_json(method, path, None, None).await
    }

    /// Posts a body verbatim, for payloads that are not valid JSON.
    pub async fn post_raw(&self, path: &str, body: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("failed to build request");
        let (status, _, bytes) = self.execute(req).await;
        let value = serde_json::from_slice(&bytes).expect("response is not valid json");
        (status, value)
    }

    /// Posts a body with no content type at all.
    pub async fn post_untyped(&self, path: &str, body: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(Method::POST)
            .uri(path)
            .body(Body::from(body.to_string()))
            .expect("failed to build request");
        let (status, _, bytes) = self.execute(req).await;
        let value = serde_json::from_slice(&bytes).expect("response is not valid json");
        (status, value)
    }

    async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> (StatusCode, Value) {
        let (status, content_type, bytes) = self.request(method, path, body, bearer).await;

        if bytes.is_empty() {
            return (status, Value::Null);
        }

        assert!(
            content_type
                .as_deref()
                .is_some_and(|ct| ct.starts_with("application/json")),
            "expected a json response, got {content_type:?}"
        );
        let value = serde_json::from_slice(&bytes).expect("response is not valid json");
        (status, value)
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> (StatusCode, Option<String>, Vec<u8>) {
        let mut req_builder = Request::builder().method(method).uri(path);

        if let Some(token) = bearer {
            req_builder = req_builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let body = match body {
            Some(body) => {
                req_builder = req_builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&body).expect("failed to serialize request body"))
            }
            None => Body::empty(),
        };

        let req = req_builder.body(body).expect("failed to build request");
        self.execute(req).await
    }

    async fn execute(&self, req: Request<Body>) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = self
            .app
            .clone()
            .oneshot(req)
            .await
            .expect("request execution failed");

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("failed to read response body");

        (status, content_type, bytes.to_vec())
    }
}
