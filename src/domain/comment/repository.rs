use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::{CommentContent, CommenterName};
use crate::domain::errors::DomainResult;
use crate::domain::ids::{ArticleId, CommentId};
use async_trait::async_trait;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct CommentFilter {
    pub article_id: Option<ArticleId>,
    pub is_approved: Option<bool>,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_duplicate(
        &self,
        article_id: &ArticleId,
        author_name: &CommenterName,
        content: &CommentContent,
    ) -> DomainResult<Option<Comment>>;
    async fn insert(&self, comment: NewComment) -> DomainResult<CommentId>;
    /// Newest first.
    async fn list(&self, filter: &CommentFilter) -> DomainResult<Vec<Comment>>;
    /// Returns the number of modified records; unknown ids modify nothing.
    async fn set_approval(&self, id: &CommentId, approved: bool) -> DomainResult<u64>;
    /// Returns the number of removed records (0 or 1).
    async fn delete(&self, id: &CommentId) -> DomainResult<u64>;
    async fn search(&self, needle: &str, limit: usize) -> DomainResult<Vec<Comment>>;
    async fn count(&self, approved: Option<bool>) -> DomainResult<u64>;
    /// Comment count keyed by the author id of the commented article.
    ///
    /// Comments pointing at a missing or malformed article id are skipped.
    async fn counts_by_article_author(&self) -> DomainResult<HashMap<String, u64>>;
}
