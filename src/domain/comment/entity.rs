use crate::domain::comment::value_objects::{CommentContent, CommenterName};
use crate::domain::ids::{ArticleId, CommentId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author_name: CommenterName,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
    pub is_approved: bool,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author_name: CommenterName,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
    pub is_approved: bool,
}
