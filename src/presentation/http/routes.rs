// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{analytics, articles, authors, categories, comments, search},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{MethodRouter, delete, get, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health));

    let listings: [(&str, MethodRouter); 8] = [
        ("/authors", get(authors::list_authors).post(authors::create_author)),
        (
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        ),
        ("/articles", get(articles::list_articles).post(articles::create_article)),
        ("/comments", get(comments::list_comments).post(comments::create_comment)),
        ("/content-management", get(analytics::content_management)),
        ("/author-activity", get(analytics::author_activity)),
        ("/statistics", get(analytics::statistics)),
        ("/search", get(search::search)),
    ];
    let router = listings
        .into_iter()
        .fold(router, |router, (path, handlers)| {
            with_trailing_slash(router, path, handlers)
        });

    router
        .route(
            "/articles/{id}",
            get(articles::get_article).put(articles::update_article_status),
        )
        .route("/articles/{id}/full", put(articles::update_article))
        .route("/comments/{id}/approve", put(comments::approve_comment))
        .route("/comments/{id}/unapprove", put(comments::unapprove_comment))
        .route("/comments/{id}", delete(comments::delete_comment))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

/// Registers a top-level route with and without the trailing slash.
fn with_trailing_slash(router: Router, path: &str, handlers: MethodRouter) -> Router {
    router
        .route(&format!("{path}/"), handlers.clone())
        .route(path, handlers)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
