// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand, SetApprovalCommand},
    dto::{CommentDto, CreatedDto, DeleteResultDto, ModifiedCountDto},
    queries::comments::ListCommentsQuery,
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
pub struct CommentListParams {
    #[serde(default)]
    pub article_id: Option<String>,
    #[serde(default)]
    pub is_approved: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    pub article_id: String,
    pub author_name: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_approved: bool,
}

#[utoipa::path(
    post,
    path = "/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 200, description = "Comment created, or the id of an identical existing comment.", body = CreatedDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<Json<CreatedDto>> {
    let command = CreateCommentCommand {
        article_id: payload.article_id,
        author_name: payload.author_name,
        content: payload.content,
        created_at: payload.created_at,
        is_approved: payload.is_approved,
    };

    state
        .services
        .comment_commands
        .create_comment(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/comments",
    params(CommentListParams),
    responses(
        (status = 200, description = "Matching comments with article titles, newest first.", body = [CommentDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CommentListParams>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    let query = ListCommentsQuery {
        article_id: params.article_id,
        is_approved: params.is_approved,
    };

    state
        .services
        .comment_queries
        .list_comments(query)
        .await
        .into_http()
        .map(Json)
}

async fn set_approval(state: HttpState, id: String, approved: bool) -> HttpResult<Json<ModifiedCountDto>> {
    state
        .services
        .comment_commands
        .set_approval(SetApprovalCommand { id, approved })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/comments/{id}/approve",
    params(("id" = String, Path, description = "Comment identifier")),
    responses(
        (status = 200, description = "Number of comments changed (0 when already approved or unknown).", body = ModifiedCountDto),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn approve_comment(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ModifiedCountDto>> {
    set_approval(state, id, true).await
}

#[utoipa::path(
    put,
    path = "/comments/{id}/unapprove",
    params(("id" = String, Path, description = "Comment identifier")),
    responses(
        (status = 200, description = "Number of comments changed (0 when already pending or unknown).", body = ModifiedCountDto),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn unapprove_comment(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ModifiedCountDto>> {
    set_approval(state, id, false).await
}

#[utoipa::path(
    delete,
    path = "/comments/{id}",
    params(("id" = String, Path, description = "Comment identifier")),
    responses(
        (status = 200, description = "Deletion outcome; `deleted_count` is 0 with an error message for unknown ids.", body = DeleteResultDto),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<DeleteResultDto>> {
    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { id })
        .await
        .into_http()
        .map(Json)
}
