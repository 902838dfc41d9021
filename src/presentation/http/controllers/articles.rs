// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, UpdateArticleCommand, UpdateArticleStatusCommand},
    dto::{ArticleDto, CreatedDto, UpdateResultDto},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Exact status label, e.g. `Опубликовано`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub author_id: String,
    #[serde(default)]
    pub category_id: Option<String>,
    /// Defaults to `Черновик`.
    #[serde(default)]
    pub status: Option<String>,
    /// Ignored unless the status is `Опубликовано`.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Body of the status-only update. Other keys are ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PartialArticleUpdate {
    #[serde(default)]
    pub status: Option<String>,
}

/// Body of the full update. Absent keys leave the stored field untouched;
/// an empty `category_id` moves the article out of its category.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct FullArticleUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "Article created, or the id of the existing article with the same title and author.", body = CreatedDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<CreatedDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        author_id: payload.author_id,
        category_id: payload.category_id,
        status: payload.status,
        published_at: payload.published_at,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Matching articles, newest first.", body = [ArticleDto]),
        (status = 400, description = "Unknown status filter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let query = ListArticlesQuery {
        status: params.status,
        author_id: params.author_id,
        category_id: params.category_id,
    };

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = String, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article with author and category names.", body = ArticleDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/articles/{id}",
    params(("id" = String, Path, description = "Article identifier")),
    request_body = PartialArticleUpdate,
    responses(
        (status = 200, description = "Status updated.", body = UpdateResultDto),
        (status = 400, description = "Unknown status.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article_status(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<PartialArticleUpdate>,
) -> HttpResult<Json<UpdateResultDto>> {
    let command = UpdateArticleStatusCommand {
        id,
        status: payload.status,
    };

    state
        .services
        .article_commands
        .update_article_status(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/articles/{id}/full",
    params(("id" = String, Path, description = "Article identifier")),
    request_body = FullArticleUpdate,
    responses(
        (status = 200, description = "Article updated.", body = UpdateResultDto),
        (status = 400, description = "Invalid field value.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<FullArticleUpdate>,
) -> HttpResult<Json<UpdateResultDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
        author_id: payload.author_id,
        category_id: payload.category_id,
        status: payload.status,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}
