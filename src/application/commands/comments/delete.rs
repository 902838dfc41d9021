use super::CommentCommandService;
use crate::{
    application::{dto::DeleteResultDto, error::ApplicationResult},
    domain::comment::CommentId,
};

pub struct DeleteCommentCommand {
    pub id: String,
}

impl CommentCommandService {
    pub async fn delete_comment(
        &self,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<DeleteResultDto> {
        let Ok(id) = CommentId::new(command.id) else {
            return Ok(DeleteResultDto::not_found("Comment not found"));
        };

        match self.repo.delete(&id).await? {
            0 => Ok(DeleteResultDto::not_found("Comment not found")),
            deleted => {
                tracing::info!(comment_id = %id, "comment deleted");
                Ok(DeleteResultDto::deleted(deleted))
            }
        }
    }
}
