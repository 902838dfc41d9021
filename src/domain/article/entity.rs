// src/domain/article/entity.rs
use crate::domain::article::lifecycle::{self, PublishedAtChange};
use crate::domain::article::value_objects::{ArticleStatus, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{ArticleId, AuthorId, CategoryId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: String,
    pub author_id: AuthorId,
    pub category_id: Option<CategoryId>,
    pub status: ArticleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: String,
    pub author_id: AuthorId,
    pub category_id: Option<CategoryId>,
    pub status: ArticleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl NewArticle {
    /// Normalizes `published_at` against the status, then re-checks the result.
    pub fn prepare(mut self, now: DateTime<Utc>) -> DomainResult<Self> {
        self.published_at = lifecycle::normalize_published_at(self.status, self.published_at, now);
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> DomainResult<()> {
        lifecycle::ensure_consistent(self.status, self.published_at)
    }
}

/// A set of field changes for one stored article.
///
/// `None` leaves the stored field untouched. `category_id: Some(None)` moves the
/// article out of any category.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub content: Option<String>,
    pub author_id: Option<AuthorId>,
    pub category_id: Option<Option<CategoryId>>,
    pub status: Option<ArticleStatus>,
    pub published_at: PublishedAtChange,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            author_id: None,
            category_id: None,
            status: None,
            published_at: PublishedAtChange::Keep,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_author(mut self, author_id: AuthorId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Sets the status and derives the publish date change from the stored value.
    pub fn with_status(
        mut self,
        status: ArticleStatus,
        current_published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.status = Some(status);
        self.published_at =
            PublishedAtChange::for_status(status, current_published_at, self.updated_at);
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        match (self.status, self.published_at) {
            (Some(status), PublishedAtChange::Set(at)) => {
                lifecycle::ensure_consistent(status, Some(at))
            }
            (None, PublishedAtChange::Set(_) | PublishedAtChange::Clear) => Err(
                DomainError::Validation("publish date can only change with status".into()),
            ),
            _ => Ok(()),
        }
    }
}
