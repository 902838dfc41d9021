// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::CreateCategoryCommand,
    dto::{CategoryDto, CreatedDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[utoipa::path(
    post,
    path = "/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category created, or the id of the existing category with the same name.", body = CreatedDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<Json<CreatedDto>> {
    let command = CreateCategoryCommand {
        name: payload.name,
        description: payload.description,
    };

    state
        .services
        .category_commands
        .create_category(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories.", body = [CategoryDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}
