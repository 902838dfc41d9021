// src/infrastructure/repositories/mongo_author.rs
use super::{
    AUTHORS,
    documents::{
        bson_id, decode_all, document_id, object_id, required_datetime, stored_str,
        to_bson_datetime,
    },
    map_mongo,
};
use crate::domain::author::{Author, AuthorId, AuthorRepository, FullName, NewAuthor};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
};

#[derive(Clone)]
pub struct MongoAuthorRepository {
    collection: Collection<Document>,
}

impl MongoAuthorRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(AUTHORS),
        }
    }
}

fn author_from_document(doc: Document) -> DomainResult<Author> {
    Ok(Author {
        id: AuthorId::from_stored(document_id(&doc)?),
        full_name: FullName::from_stored(stored_str(&doc, "full_name")),
        email: stored_str(&doc, "email"),
        registration_date: required_datetime(&doc, "registration_date")?,
    })
}

#[async_trait]
impl AuthorRepository for MongoAuthorRepository {
    async fn find_by_identity(
        &self,
        full_name: &FullName,
        email: &str,
    ) -> DomainResult<Option<Author>> {
        let found = self
            .collection
            .find_one(doc! { "full_name": full_name.as_str(), "email": email })
            .await
            .map_err(map_mongo("authors.find_by_identity"))?;
        found.map(author_from_document).transpose()
    }

    async fn insert(&self, author: NewAuthor) -> DomainResult<AuthorId> {
        let document = doc! {
            "full_name": author.full_name.as_str(),
            "email": author.email,
            "registration_date": to_bson_datetime(author.registration_date),
        };
        let result = self
            .collection
            .insert_one(document)
            .await
            .map_err(map_mongo("authors.insert"))?;
        let id = bson_id(&result.inserted_id)
            .ok_or_else(|| DomainError::persistence("authors.insert: unexpected id type"))?;
        AuthorId::new(id)
    }

    async fn find_by_id(&self, id: &AuthorId) -> DomainResult<Option<Author>> {
        let Some(oid) = object_id(id.as_str()) else {
            return Ok(None);
        };
        let found = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(map_mongo("authors.find_by_id"))?;
        found.map(author_from_document).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Author>> {
        let docs: Vec<Document> = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_mongo("authors.list"))?
            .try_collect()
            .await
            .map_err(map_mongo("authors.list"))?;
        Ok(decode_all(AUTHORS, docs, author_from_document))
    }

    async fn count(&self) -> DomainResult<u64> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(map_mongo("authors.count"))
    }
}
