// src/presentation/http/controllers/analytics.rs
use crate::application::dto::{AuthorActivityDto, ContentOverviewDto, StatisticsDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/content-management",
    responses(
        (status = 200, description = "Every article with author and category names, newest first.", body = [ContentOverviewDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Analytics"
)]
pub async fn content_management(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ContentOverviewDto>>> {
    state
        .services
        .analytics
        .content_overview()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/author-activity",
    responses(
        (status = 200, description = "Published article and received comment counts per author.", body = [AuthorActivityDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Analytics"
)]
pub async fn author_activity(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<AuthorActivityDto>>> {
    state
        .services
        .analytics
        .author_activity()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/statistics",
    responses(
        (status = 200, description = "Site-wide totals and category distribution.", body = StatisticsDto),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Analytics"
)]
pub async fn statistics(Extension(state): Extension<HttpState>) -> HttpResult<Json<StatisticsDto>> {
    state
        .services
        .analytics
        .statistics()
        .await
        .into_http()
        .map(Json)
}
