// src/infrastructure/repositories/mongo_category.rs
use super::{
    CATEGORIES,
    documents::{bson_id, decode_all, document_id, object_id, optional_str, stored_str},
    map_mongo,
};
use crate::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Bson, Document, doc},
};

#[derive(Clone)]
pub struct MongoCategoryRepository {
    collection: Collection<Document>,
}

impl MongoCategoryRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(CATEGORIES),
        }
    }
}

fn category_from_document(doc: Document) -> DomainResult<Category> {
    Ok(Category {
        id: CategoryId::from_stored(document_id(&doc)?),
        name: CategoryName::from_stored(stored_str(&doc, "name")),
        description: optional_str(&doc, "description"),
    })
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        let found = self
            .collection
            .find_one(doc! { "name": name.as_str() })
            .await
            .map_err(map_mongo("categories.find_by_name"))?;
        found.map(category_from_document).transpose()
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<CategoryId> {
        let description = category.description.map(Bson::String).unwrap_or(Bson::Null);
        let result = self
            .collection
            .insert_one(doc! { "name": category.name.as_str(), "description": description })
            .await
            .map_err(map_mongo("categories.insert"))?;
        let id = bson_id(&result.inserted_id)
            .ok_or_else(|| DomainError::persistence("categories.insert: unexpected id type"))?;
        CategoryId::new(id)
    }

    async fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>> {
        let Some(oid) = object_id(id.as_str()) else {
            return Ok(None);
        };
        let found = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(map_mongo("categories.find_by_id"))?;
        found.map(category_from_document).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let docs: Vec<Document> = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_mongo("categories.list"))?
            .try_collect()
            .await
            .map_err(map_mongo("categories.list"))?;
        Ok(decode_all(CATEGORIES, docs, category_from_document))
    }
}
