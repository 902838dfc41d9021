use super::{ArticleDto, CommentDto};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the content-management table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentOverviewDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub author_name: String,
    pub category_name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorActivityDto {
    pub author_name: String,
    pub email: String,
    pub registration_date: DateTime<Utc>,
    pub published_articles_count: u64,
    pub total_comments_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryCountDto {
    /// Category display name; serialized under the grouping key `_id`.
    #[serde(rename = "_id")]
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatisticsDto {
    pub total_articles: u64,
    pub total_published: u64,
    pub total_moderation: u64,
    pub total_drafts: u64,
    pub total_authors: u64,
    pub total_comments: u64,
    pub total_approved_comments: u64,
    pub categories_distribution: Vec<CategoryCountDto>,
    pub published_percentage: f64,
}

/// Search hits keyed by the scopes that were searched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SearchResultsDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub articles: Option<Vec<ArticleDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<CommentDto>>,
}
