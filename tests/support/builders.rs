// tests/support/builders.rs
use super::mocks::fixed_now;
use blog_admin::domain::article::{Article, ArticleId, ArticleStatus, ArticleTitle};
use blog_admin::domain::author::AuthorId;
use blog_admin::domain::category::CategoryId;
use blog_admin::domain::comment::{Comment, CommentContent, CommentId, CommenterName};
use chrono::{DateTime, Utc};

/// Builds raw stored articles, including ones that break referential rules.
pub struct ArticleBuilder {
    title: String,
    content: String,
    author_id: String,
    category_id: Option<String>,
    status: ArticleStatus,
    created_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            title: "Test Article".into(),
            content: "Test body".into(),
            author_id: "000000000000000000000fff".into(),
            category_id: None,
            status: ArticleStatus::Draft,
            created_at: fixed_now(),
            published_at: None,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.into();
        self
    }

    pub fn author_id(mut self, author_id: &str) -> Self {
        self.author_id = author_id.into();
        self
    }

    pub fn category_id(mut self, category_id: &str) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn published(mut self) -> Self {
        self.status = ArticleStatus::Published;
        self.published_at = Some(self.created_at);
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn build(self) -> Article {
        Article {
            // Replaced by the store on seed.
            id: ArticleId::from_stored("placeholder"),
            title: ArticleTitle::from_stored(self.title),
            content: self.content,
            author_id: AuthorId::from_stored(self.author_id),
            category_id: CategoryId::optional(self.category_id),
            status: self.status,
            created_at: self.created_at,
            updated_at: self.created_at,
            published_at: self.published_at,
        }
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stored_comment(article_id: &str, author_name: &str, content: &str) -> Comment {
    Comment {
        id: CommentId::from_stored("placeholder"),
        article_id: ArticleId::from_stored(article_id),
        author_name: CommenterName::from_stored(author_name),
        content: CommentContent::from_stored(content),
        created_at: fixed_now(),
        is_approved: false,
    }
}
