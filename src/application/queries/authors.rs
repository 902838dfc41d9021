use std::sync::Arc;

use crate::{
    application::{dto::AuthorDto, error::ApplicationResult},
    domain::author::AuthorRepository,
};

pub struct AuthorQueryService {
    repo: Arc<dyn AuthorRepository>,
}

impl AuthorQueryService {
    pub fn new(repo: Arc<dyn AuthorRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_authors(&self) -> ApplicationResult<Vec<AuthorDto>> {
        let authors = self.repo.list().await?;
        Ok(authors.into_iter().map(Into::into).collect())
    }
}
