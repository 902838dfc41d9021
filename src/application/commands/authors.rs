// src/application/commands/authors.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    application::{dto::CreatedDto, error::ApplicationResult, ports::time::Clock},
    domain::author::{AuthorRepository, FullName, NewAuthor},
};

pub struct CreateAuthorCommand {
    pub full_name: String,
    pub email: String,
    pub registration_date: Option<DateTime<Utc>>,
}

pub struct AuthorCommandService {
    repo: Arc<dyn AuthorRepository>,
    clock: Arc<dyn Clock>,
}

impl AuthorCommandService {
    pub fn new(repo: Arc<dyn AuthorRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Deduplicates on full name and email. The lookup and the insert are two
    /// separate store calls, so concurrent identical requests may both insert.
    pub async fn create_author(&self, command: CreateAuthorCommand) -> ApplicationResult<CreatedDto> {
        let full_name = FullName::new(command.full_name)?;

        if let Some(existing) = self.repo.find_by_identity(&full_name, &command.email).await? {
            tracing::debug!(author_id = %existing.id, "author already exists");
            return Ok(CreatedDto::existing(existing.id, "Author already exists"));
        }

        let new_author = NewAuthor {
            full_name,
            email: command.email,
            registration_date: command.registration_date.unwrap_or_else(|| self.clock.now()),
        };
        let id = self.repo.insert(new_author).await?;
        tracing::info!(author_id = %id, "author created");
        Ok(CreatedDto::created(id))
    }
}
