// src/presentation/http/controllers/search.rs
use crate::application::{dto::SearchResultsDto, queries::search::SearchQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// At least two characters after trimming.
    #[serde(default)]
    pub query: String,
    /// `all` (default), `articles` or `comments`.
    #[serde(default)]
    pub search_in: Option<String>,
}

#[utoipa::path(
    get,
    path = "/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Up to ten matches per searched collection.", body = SearchResultsDto),
        (status = 400, description = "Query too short or unknown scope.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Search"
)]
pub async fn search(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<SearchResultsDto>> {
    let query = SearchQuery {
        query: params.query,
        search_in: params.search_in,
    };

    state
        .services
        .search
        .search(query)
        .await
        .into_http()
        .map(Json)
}
