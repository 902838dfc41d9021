use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::comment::CommentRepository};

pub struct CommentCommandService {
    pub(super) repo: Arc<dyn CommentRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(repo: Arc<dyn CommentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
