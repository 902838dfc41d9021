// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::CreatedDto, error::ApplicationResult},
    domain::{
        article::{ArticleStatus, ArticleTitle, NewArticle},
        author::AuthorId,
        category::CategoryId,
    },
};
use chrono::{DateTime, Utc};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub category_id: Option<String>,
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    author_id: Option<String>,
    category_id: Option<String>,
    status: Option<String>,
    published_at: Option<DateTime<Utc>>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn author_id(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = Some(author_id.into());
        self
    }

    pub fn category_id(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status.as_str().to_string());
        self
    }

    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            author_id: self.author_id.ok_or("author_id is required")?,
            category_id: self.category_id,
            status: self.status,
            published_at: self.published_at,
        })
    }
}

impl ArticleCommandService {
    /// Deduplicates on title and author id; see `AuthorCommandService::create_author`
    /// for the race this tolerates.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<CreatedDto> {
        let title = ArticleTitle::new(command.title)?;
        let author_id = AuthorId::new(command.author_id)?;
        let status = command
            .status
            .as_deref()
            .map(str::parse::<ArticleStatus>)
            .transpose()?
            .unwrap_or_default();

        if let Some(existing) = self
            .read_repo
            .find_by_title_and_author(&title, &author_id)
            .await?
        {
            return Ok(CreatedDto::existing(
                existing.id,
                "Article with this title by this author already exists",
            ));
        }

        let now = self.clock.now();
        let new_article = NewArticle {
            title,
            content: command.content,
            author_id,
            category_id: CategoryId::optional(command.category_id),
            status,
            created_at: now,
            updated_at: now,
            published_at: command.published_at,
        }
        .prepare(now)?;

        let id = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %id, status = %status, "article created");
        Ok(CreatedDto::created(id))
    }
}
