use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleStatus, ArticleTitle};
use crate::domain::errors::DomainResult;
use crate::domain::ids::{ArticleId, AuthorId, CategoryId};
use async_trait::async_trait;
use std::collections::HashMap;

/// Exact-match conjunction; unset fields do not restrict.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub author_id: Option<AuthorId>,
    pub category_id: Option<CategoryId>,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId>;
    /// Returns the number of modified records.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<u64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_title_and_author(
        &self,
        title: &ArticleTitle,
        author_id: &AuthorId,
    ) -> DomainResult<Option<Article>>;
    /// Newest first.
    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>>;
    /// Case-insensitive substring match on title or content, store order.
    async fn search(&self, needle: &str, limit: usize) -> DomainResult<Vec<Article>>;
    async fn count(&self, status: Option<ArticleStatus>) -> DomainResult<u64>;
    async fn count_in_category(&self, category_id: &CategoryId) -> DomainResult<u64>;
    /// Articles whose category id is missing, empty or null.
    async fn count_uncategorized(&self) -> DomainResult<u64>;
    /// Published article count keyed by raw author id.
    async fn published_counts_by_author(&self) -> DomainResult<HashMap<String, u64>>;
}
