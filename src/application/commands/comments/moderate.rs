use super::CommentCommandService;
use crate::{
    application::{dto::ModifiedCountDto, error::ApplicationResult},
    domain::comment::CommentId,
};

pub struct SetApprovalCommand {
    pub id: String,
    pub approved: bool,
}

impl CommentCommandService {
    /// Reports how many records changed: approving an approved comment or an
    /// unknown id yields zero.
    pub async fn set_approval(
        &self,
        command: SetApprovalCommand,
    ) -> ApplicationResult<ModifiedCountDto> {
        let Ok(id) = CommentId::new(command.id) else {
            return Ok(ModifiedCountDto { modified_count: 0 });
        };
        let modified_count = self.repo.set_approval(&id, command.approved).await?;
        tracing::info!(comment_id = %id, approved = command.approved, modified_count, "comment moderated");
        Ok(ModifiedCountDto { modified_count })
    }
}
