use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub article_id: String,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub is_approved: bool,
    pub article_title: String,
}

impl CommentDto {
    pub fn enriched(comment: Comment, article_title: String) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            author_name: comment.author_name.into_inner(),
            content: comment.content.into_inner(),
            created_at: comment.created_at,
            is_approved: comment.is_approved,
            article_title,
        }
    }
}
