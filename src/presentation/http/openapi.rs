// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::authors::create_author,
        crate::presentation::http::controllers::authors::list_authors,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::update_article_status,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::approve_comment,
        crate::presentation::http::controllers::comments::unapprove_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::analytics::content_management,
        crate::presentation::http::controllers::analytics::author_activity,
        crate::presentation::http::controllers::analytics::statistics,
        crate::presentation::http::controllers::search::search,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::authors::CreateAuthorRequest,
            crate::presentation::http::controllers::categories::CreateCategoryRequest,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::PartialArticleUpdate,
            crate::presentation::http::controllers::articles::FullArticleUpdate,
            crate::presentation::http::controllers::comments::CreateCommentRequest,
            crate::application::dto::AuthorDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::CommentDto,
            crate::application::dto::CreatedDto,
            crate::application::dto::UpdateResultDto,
            crate::application::dto::ModifiedCountDto,
            crate::application::dto::DeleteResultDto,
            crate::application::dto::ContentOverviewDto,
            crate::application::dto::AuthorActivityDto,
            crate::application::dto::CategoryCountDto,
            crate::application::dto::StatisticsDto,
            crate::application::dto::SearchResultsDto
        )
    ),
    tags(
        (name = "Authors", description = "Author registry"),
        (name = "Categories", description = "Category registry"),
        (name = "Articles", description = "Article lifecycle endpoints"),
        (name = "Comments", description = "Comment moderation endpoints"),
        (name = "Analytics", description = "Content overview and site statistics"),
        (name = "Search", description = "Substring search over articles and comments"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Blog Admin API",
        description = "Content management backend for the blog platform",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(redoc)
}
