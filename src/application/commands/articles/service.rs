// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::article::{Article, ArticleId, ArticleReadRepository, ArticleWriteRepository},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }

    pub(super) async fn load_existing(&self, raw_id: String) -> ApplicationResult<Article> {
        let id = ArticleId::new(raw_id).map_err(|_| ApplicationError::not_found("Article not found"))?;
        self.read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Article not found"))
    }
}
