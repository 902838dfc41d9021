use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Article enriched with the display names of its author and category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub category_id: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub author_name: String,
    pub category_name: String,
}

impl ArticleDto {
    pub fn enriched(article: Article, author_name: String, category_name: String) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content,
            author_id: article.author_id.into(),
            category_id: article.category_id.map(Into::into),
            status: article.status.as_str().to_string(),
            created_at: article.created_at,
            updated_at: article.updated_at,
            published_at: article.published_at,
            author_name,
            category_name,
        }
    }
}
