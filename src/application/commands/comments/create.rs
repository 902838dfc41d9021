use super::CommentCommandService;
use crate::{
    application::{dto::CreatedDto, error::ApplicationResult},
    domain::{
        article::ArticleId,
        comment::{CommentContent, CommenterName, NewComment},
    },
};
use chrono::{DateTime, Utc};

pub struct CreateCommentCommand {
    pub article_id: String,
    pub author_name: String,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
    pub is_approved: bool,
}

impl CommentCommandService {
    /// The article id is not checked against the articles collection; a comment
    /// on a missing article lists with an unknown article title.
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CreatedDto> {
        let article_id = ArticleId::new(command.article_id)?;
        let author_name = CommenterName::new(command.author_name)?;
        let content = CommentContent::new(command.content)?;

        if let Some(existing) = self
            .repo
            .find_duplicate(&article_id, &author_name, &content)
            .await?
        {
            return Ok(CreatedDto::existing(
                existing.id,
                "Similar comment already exists",
            ));
        }

        let id = self
            .repo
            .insert(NewComment {
                article_id,
                author_name,
                content,
                created_at: command.created_at.unwrap_or_else(|| self.clock.now()),
                is_approved: command.is_approved,
            })
            .await?;
        tracing::info!(comment_id = %id, "comment created");
        Ok(CreatedDto::created(id))
    }
}
