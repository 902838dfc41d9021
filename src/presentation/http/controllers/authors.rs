// src/presentation/http/controllers/authors.rs
use crate::application::{
    commands::authors::CreateAuthorCommand,
    dto::{AuthorDto, CreatedDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAuthorRequest {
    pub full_name: String,
    pub email: String,
    /// Defaults to the time of the request.
    #[serde(default)]
    pub registration_date: Option<DateTime<Utc>>,
}

#[utoipa::path(
    post,
    path = "/authors",
    request_body = CreateAuthorRequest,
    responses(
        (status = 200, description = "Author created, or the id of the existing author with the same name and email.", body = CreatedDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn create_author(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateAuthorRequest>,
) -> HttpResult<Json<CreatedDto>> {
    let command = CreateAuthorCommand {
        full_name: payload.full_name,
        email: payload.email,
        registration_date: payload.registration_date,
    };

    state
        .services
        .author_commands
        .create_author(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/authors",
    responses(
        (status = 200, description = "All authors.", body = [AuthorDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn list_authors(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<AuthorDto>>> {
    state
        .services
        .author_queries
        .list_authors()
        .await
        .into_http()
        .map(Json)
}
