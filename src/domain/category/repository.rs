use crate::domain::category::entity::{Category, NewCategory};
use crate::domain::category::value_objects::CategoryName;
use crate::domain::errors::DomainResult;
use crate::domain::ids::CategoryId;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>>;
    async fn insert(&self, category: NewCategory) -> DomainResult<CategoryId>;
    async fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>>;
    async fn list(&self) -> DomainResult<Vec<Category>>;
}
