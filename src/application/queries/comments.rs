// src/application/queries/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CommentDto, error::ApplicationResult, services::enrichment::ReferenceResolver,
    },
    domain::{
        article::ArticleId,
        comment::{CommentFilter, CommentRepository},
    },
};

#[derive(Default)]
pub struct ListCommentsQuery {
    pub article_id: Option<String>,
    pub is_approved: Option<bool>,
}

pub struct CommentQueryService {
    repo: Arc<dyn CommentRepository>,
    resolver: Arc<ReferenceResolver>,
}

impl CommentQueryService {
    pub fn new(repo: Arc<dyn CommentRepository>, resolver: Arc<ReferenceResolver>) -> Self {
        Self { repo, resolver }
    }

    pub async fn list_comments(&self, query: ListCommentsQuery) -> ApplicationResult<Vec<CommentDto>> {
        let filter = CommentFilter {
            article_id: query.article_id.and_then(|id| ArticleId::new(id).ok()),
            is_approved: query.is_approved,
        };
        let comments = self.repo.list(&filter).await?;
        Ok(self.resolver.enrich_comments(comments).await)
    }
}
