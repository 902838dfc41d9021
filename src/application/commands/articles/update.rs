// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::UpdateResultDto, error::ApplicationResult},
    domain::{
        article::{ArticleStatus, ArticleTitle, ArticleUpdate},
        author::AuthorId,
        category::CategoryId,
    },
};

/// Partial update: only the status can change through this path.
pub struct UpdateArticleStatusCommand {
    pub id: String,
    pub status: Option<String>,
}

/// Full update over the mutable field whitelist.
///
/// An empty `category_id` moves the article out of its category.
#[derive(Default)]
pub struct UpdateArticleCommand {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<String>,
    pub category_id: Option<String>,
    pub status: Option<String>,
}

impl ArticleCommandService {
    /// Without a status there is nothing to write and the stored record,
    /// `updated_at` included, stays as it is.
    pub async fn update_article_status(
        &self,
        command: UpdateArticleStatusCommand,
    ) -> ApplicationResult<UpdateResultDto> {
        let article = self.load_existing(command.id).await?;

        let Some(raw_status) = command.status else {
            return Ok(UpdateResultDto::modified(0));
        };
        let status = raw_status.parse::<ArticleStatus>()?;

        let update = ArticleUpdate::new(article.id, self.clock.now())
            .with_status(status, article.published_at);
        update.validate()?;

        let modified = self.write_repo.update(update).await?;
        tracing::info!(status = %status, modified, "article status updated");
        Ok(UpdateResultDto::modified(modified))
    }

    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<UpdateResultDto> {
        let article = self.load_existing(command.id).await?;

        let mut update = ArticleUpdate::new(article.id.clone(), self.clock.now());
        if let Some(title) = command.title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(content) = command.content {
            update = update.with_content(content);
        }
        if let Some(author_id) = command.author_id {
            update = update.with_author(AuthorId::new(author_id)?);
        }
        if let Some(category_id) = command.category_id {
            update = update.with_category(CategoryId::optional(Some(category_id)));
        }
        if let Some(raw_status) = command.status {
            let status = raw_status.parse::<ArticleStatus>()?;
            update = update.with_status(status, article.published_at);
        }
        update.validate()?;

        let modified = self.write_repo.update(update).await?;
        tracing::info!(article_id = %article.id, modified, "article updated");
        Ok(UpdateResultDto::modified(modified))
    }
}
