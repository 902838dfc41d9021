// src/application/services/enrichment.rs
//! Read-side joins over soft references.
//!
//! Every lookup here degrades to `None` instead of failing: a malformed id, a
//! dangling reference and a store error all look the same to the caller, who
//! substitutes a sentinel display value.
use std::sync::Arc;

use crate::{
    application::dto::{ArticleDto, CommentDto},
    domain::{
        article::{Article, ArticleId, ArticleReadRepository},
        author::{AuthorId, AuthorRepository},
        category::{CategoryId, CategoryRepository},
        comment::Comment,
    },
};

/// Shown when a referenced author, category or article cannot be resolved.
pub const UNKNOWN: &str = "Unknown";
/// Shown in the content-management view for articles without a resolvable category.
pub const NO_CATEGORY: &str = "No category";
/// Bucket name for articles without a category id in site statistics.
pub const UNCATEGORIZED: &str = "Uncategorized";

pub struct ReferenceResolver {
    authors: Arc<dyn AuthorRepository>,
    categories: Arc<dyn CategoryRepository>,
    articles: Arc<dyn ArticleReadRepository>,
}

impl ReferenceResolver {
    pub fn new(
        authors: Arc<dyn AuthorRepository>,
        categories: Arc<dyn CategoryRepository>,
        articles: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            authors,
            categories,
            articles,
        }
    }

    pub async fn author_name(&self, id: &AuthorId) -> Option<String> {
        match self.authors.find_by_id(id).await {
            Ok(found) => found.map(|author| author.full_name.into_inner()),
            Err(err) => {
                tracing::warn!(author_id = %id, error = %err, "author lookup failed");
                None
            }
        }
    }

    pub async fn category_name(&self, id: Option<&CategoryId>) -> Option<String> {
        let id = id?;
        match self.categories.find_by_id(id).await {
            Ok(found) => found.map(|category| category.name.into_inner()),
            Err(err) => {
                tracing::warn!(category_id = %id, error = %err, "category lookup failed");
                None
            }
        }
    }

    pub async fn article_title(&self, id: &ArticleId) -> Option<String> {
        match self.articles.find_by_id(id).await {
            Ok(found) => found.map(|article| article.title.into_inner()),
            Err(err) => {
                tracing::warn!(article_id = %id, error = %err, "article lookup failed");
                None
            }
        }
    }

    pub async fn enrich_article(&self, article: Article) -> ArticleDto {
        let author_name = self
            .author_name(&article.author_id)
            .await
            .unwrap_or_else(|| UNKNOWN.to_string());
        let category_name = self
            .category_name(article.category_id.as_ref())
            .await
            .unwrap_or_else(|| UNKNOWN.to_string());
        ArticleDto::enriched(article, author_name, category_name)
    }

    pub async fn enrich_articles(&self, articles: Vec<Article>) -> Vec<ArticleDto> {
        let mut items = Vec::with_capacity(articles.len());
        for article in articles {
            items.push(self.enrich_article(article).await);
        }
        items
    }

    pub async fn enrich_comments(&self, comments: Vec<Comment>) -> Vec<CommentDto> {
        let mut items = Vec::with_capacity(comments.len());
        for comment in comments {
            let title = self
                .article_title(&comment.article_id)
                .await
                .unwrap_or_else(|| UNKNOWN.to_string());
            items.push(CommentDto::enriched(comment, title));
        }
        items
    }
}
