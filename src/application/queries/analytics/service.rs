use std::sync::Arc;

use crate::{
    application::services::enrichment::ReferenceResolver,
    domain::{
        article::ArticleReadRepository, author::AuthorRepository, category::CategoryRepository,
        comment::CommentRepository,
    },
};

/// Cross-collection read models: content overview, author activity and site
/// statistics. Computed on every call; nothing is materialized.
pub struct AnalyticsQueryService {
    pub(super) authors: Arc<dyn AuthorRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) articles: Arc<dyn ArticleReadRepository>,
    pub(super) comments: Arc<dyn CommentRepository>,
    pub(super) resolver: Arc<ReferenceResolver>,
}

impl AnalyticsQueryService {
    pub fn new(
        authors: Arc<dyn AuthorRepository>,
        categories: Arc<dyn CategoryRepository>,
        articles: Arc<dyn ArticleReadRepository>,
        comments: Arc<dyn CommentRepository>,
        resolver: Arc<ReferenceResolver>,
    ) -> Self {
        Self {
            authors,
            categories,
            articles,
            comments,
            resolver,
        }
    }
}
