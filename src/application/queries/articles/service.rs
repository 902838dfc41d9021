use std::sync::Arc;

use crate::{
    application::services::enrichment::ReferenceResolver,
    domain::article::ArticleReadRepository,
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) resolver: Arc<ReferenceResolver>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, resolver: Arc<ReferenceResolver>) -> Self {
        Self {
            read_repo,
            resolver,
        }
    }
}
