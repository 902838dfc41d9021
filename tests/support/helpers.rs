// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryStore};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use blog_admin::application::ports::time::Clock;
use blog_admin::application::services::ApplicationServices;
use blog_admin::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    author::AuthorRepository,
    category::CategoryRepository,
    comment::CommentRepository,
};
use blog_admin::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

/// Services wired to one in-memory store and a frozen clock.
pub struct TestApp {
    pub store: InMemoryStore,
    pub clock: Arc<FixedClock>,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_authors(None)
    }

    /// Same as [`TestApp::new`] but with a custom author repository.
    pub fn with_authors(authors: Option<Arc<dyn AuthorRepository>>) -> Self {
        let store = InMemoryStore::new();
        let clock = Arc::new(FixedClock::new());

        let author_repo: Arc<dyn AuthorRepository> =
            authors.unwrap_or_else(|| Arc::new(store.clone()));
        let category_repo: Arc<dyn CategoryRepository> = Arc::new(store.clone());
        let article_write: Arc<dyn ArticleWriteRepository> = Arc::new(store.clone());
        let article_read: Arc<dyn ArticleReadRepository> = Arc::new(store.clone());
        let comment_repo: Arc<dyn CommentRepository> = Arc::new(store.clone());
        let clock_port: Arc<dyn Clock> = clock.clone();

        let services = Arc::new(ApplicationServices::new(
            author_repo,
            category_repo,
            article_write,
            article_read,
            comment_repo,
            clock_port,
        ));

        Self {
            store,
            clock,
            services,
        }
    }

    pub fn router(&self) -> Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &["http://localhost:3000".to_string()])
    }
}

/// Sends one request through the router and decodes the JSON body.
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let req = builder.body(body).unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!(
                "expected JSON body, got: {}",
                String::from_utf8_lossy(&bytes)
            )
        })
    };
    (status, json)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    send_json(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send_json(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send_json(app, Method::PUT, uri, Some(body)).await
}

/// Checks the uniform `{ error, message }` body of a failed request.
pub fn assert_error_body(status: StatusCode, json: &Value, expected: StatusCode) {
    assert_eq!(status, expected, "unexpected status, body: {json}");
    let error = json.get("error").and_then(Value::as_str).unwrap_or("");
    let message = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(error, expected.canonical_reason().unwrap_or("error"));
    assert!(!message.is_empty(), "expected non-empty message field");
}

/// Pulls the `id` field out of a create response.
pub fn created_id(json: &Value) -> String {
    json.get("id")
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("no id in {json}"))
        .to_string()
}
