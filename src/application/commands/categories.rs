// src/application/commands/categories.rs
use std::sync::Arc;

use crate::{
    application::{dto::CreatedDto, error::ApplicationResult},
    domain::category::{CategoryName, CategoryRepository, NewCategory},
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
}

pub struct CategoryCommandService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CreatedDto> {
        let name = CategoryName::new(command.name)?;

        if let Some(existing) = self.repo.find_by_name(&name).await? {
            return Ok(CreatedDto::existing(existing.id, "Category already exists"));
        }

        let id = self
            .repo
            .insert(NewCategory {
                name,
                description: command.description,
            })
            .await?;
        tracing::info!(category_id = %id, "category created");
        Ok(CreatedDto::created(id))
    }
}
