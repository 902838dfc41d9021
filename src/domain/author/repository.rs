use crate::domain::author::entity::{Author, NewAuthor};
use crate::domain::author::value_objects::FullName;
use crate::domain::errors::DomainResult;
use crate::domain::ids::AuthorId;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Dedup lookup used before insert: same full name and email.
    async fn find_by_identity(
        &self,
        full_name: &FullName,
        email: &str,
    ) -> DomainResult<Option<Author>>;
    async fn insert(&self, author: NewAuthor) -> DomainResult<AuthorId>;
    /// Malformed ids resolve to `None`, same as a missing record.
    async fn find_by_id(&self, id: &AuthorId) -> DomainResult<Option<Author>>;
    async fn list(&self) -> DomainResult<Vec<Author>>;
    async fn count(&self) -> DomainResult<u64>;
}
