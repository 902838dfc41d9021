// src/infrastructure/repositories/mongo_article.rs
use super::{
    ARTICLES,
    documents::{
        bson_id, collect_counts, contains_pattern, decode_all, document_id, object_id,
        optional_datetime, optional_datetime_bson, optional_ref, required_datetime, required_str,
        stored_str, to_bson_datetime,
    },
    map_mongo,
};
use crate::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleStatus, ArticleTitle,
    ArticleUpdate, ArticleWriteRepository, NewArticle, PublishedAtChange,
};
use crate::domain::author::AuthorId;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Bson, Document, doc},
};
use std::collections::HashMap;

/// Serves both the read and the write side of the articles collection.
#[derive(Clone)]
pub struct MongoArticleRepository {
    collection: Collection<Document>,
}

impl MongoArticleRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(ARTICLES),
        }
    }

    async fn fetch(
        &self,
        operation: &'static str,
        filter: Document,
        newest_first: bool,
        limit: Option<i64>,
    ) -> DomainResult<Vec<Article>> {
        let mut find = self.collection.find(filter);
        if newest_first {
            find = find.sort(doc! { "created_at": -1 });
        }
        if let Some(limit) = limit {
            find = find.limit(limit);
        }
        let docs: Vec<Document> = find
            .await
            .map_err(map_mongo(operation))?
            .try_collect()
            .await
            .map_err(map_mongo(operation))?;
        Ok(decode_all(ARTICLES, docs, article_from_document))
    }

    async fn count_matching(&self, operation: &'static str, filter: Document) -> DomainResult<u64> {
        self.collection
            .count_documents(filter)
            .await
            .map_err(map_mongo(operation))
    }
}

fn article_from_document(doc: Document) -> DomainResult<Article> {
    let status = required_str(&doc, "status")?
        .parse::<ArticleStatus>()
        .map_err(|err| DomainError::persistence(err.to_string()))?;
    Ok(Article {
        id: ArticleId::from_stored(document_id(&doc)?),
        title: ArticleTitle::from_stored(stored_str(&doc, "title")),
        content: stored_str(&doc, "content"),
        author_id: AuthorId::from_stored(stored_str(&doc, "author_id")),
        category_id: CategoryId::optional(optional_ref(&doc, "category_id")),
        status,
        created_at: required_datetime(&doc, "created_at")?,
        updated_at: required_datetime(&doc, "updated_at")?,
        published_at: optional_datetime(&doc, "published_at"),
    })
}

fn new_article_document(article: NewArticle) -> Document {
    let category_id = article
        .category_id
        .map(|id| Bson::String(id.into_inner()))
        .unwrap_or(Bson::Null);
    doc! {
        "title": article.title.into_inner(),
        "content": article.content,
        "author_id": article.author_id.into_inner(),
        "category_id": category_id,
        "status": article.status.as_str(),
        "created_at": to_bson_datetime(article.created_at),
        "updated_at": to_bson_datetime(article.updated_at),
        "published_at": optional_datetime_bson(article.published_at),
    }
}

fn update_set_document(update: ArticleUpdate) -> Document {
    let mut set = doc! { "updated_at": to_bson_datetime(update.updated_at) };
    if let Some(title) = update.title {
        set.insert("title", title.into_inner());
    }
    if let Some(content) = update.content {
        set.insert("content", content);
    }
    if let Some(author_id) = update.author_id {
        set.insert("author_id", author_id.into_inner());
    }
    if let Some(category_id) = update.category_id {
        let value = category_id
            .map(|id| Bson::String(id.into_inner()))
            .unwrap_or(Bson::Null);
        set.insert("category_id", value);
    }
    if let Some(status) = update.status {
        set.insert("status", status.as_str());
    }
    match update.published_at {
        PublishedAtChange::Keep => {}
        PublishedAtChange::Set(at) => {
            set.insert("published_at", to_bson_datetime(at));
        }
        PublishedAtChange::Clear => {
            set.insert("published_at", Bson::Null);
        }
    }
    set
}

fn filter_document(filter: &ArticleFilter) -> Document {
    let mut query = Document::new();
    if let Some(status) = filter.status {
        query.insert("status", status.as_str());
    }
    if let Some(author_id) = &filter.author_id {
        query.insert("author_id", author_id.as_str());
    }
    if let Some(category_id) = &filter.category_id {
        query.insert("category_id", category_id.as_str());
    }
    query
}

#[async_trait]
impl ArticleWriteRepository for MongoArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        article.validate()?;
        let result = self
            .collection
            .insert_one(new_article_document(article))
            .await
            .map_err(map_mongo("articles.insert"))?;
        let id = bson_id(&result.inserted_id)
            .ok_or_else(|| DomainError::persistence("articles.insert: unexpected id type"))?;
        ArticleId::new(id)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<u64> {
        update.validate()?;
        let Some(oid) = object_id(update.id.as_str()) else {
            return Ok(0);
        };
        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$set": update_set_document(update) })
            .await
            .map_err(map_mongo("articles.update"))?;
        Ok(result.modified_count)
    }
}

#[async_trait]
impl ArticleReadRepository for MongoArticleRepository {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let Some(oid) = object_id(id.as_str()) else {
            return Ok(None);
        };
        let found = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(map_mongo("articles.find_by_id"))?;
        found.map(article_from_document).transpose()
    }

    async fn find_by_title_and_author(
        &self,
        title: &ArticleTitle,
        author_id: &AuthorId,
    ) -> DomainResult<Option<Article>> {
        let found = self
            .collection
            .find_one(doc! { "title": title.as_str(), "author_id": author_id.as_str() })
            .await
            .map_err(map_mongo("articles.find_by_title_and_author"))?;
        found.map(article_from_document).transpose()
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        self.fetch("articles.list", filter_document(filter), true, None)
            .await
    }

    async fn search(&self, needle: &str, limit: usize) -> DomainResult<Vec<Article>> {
        let pattern = contains_pattern(needle);
        let filter = doc! {
            "$or": [
                { "title": pattern.clone() },
                { "content": pattern },
            ]
        };
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.fetch("articles.search", filter, false, Some(limit))
            .await
    }

    async fn count(&self, status: Option<ArticleStatus>) -> DomainResult<u64> {
        let filter = match status {
            Some(status) => doc! { "status": status.as_str() },
            None => doc! {},
        };
        self.count_matching("articles.count", filter).await
    }

    async fn count_in_category(&self, category_id: &CategoryId) -> DomainResult<u64> {
        self.count_matching(
            "articles.count_in_category",
            doc! { "category_id": category_id.as_str() },
        )
        .await
    }

    async fn count_uncategorized(&self) -> DomainResult<u64> {
        let filter = doc! {
            "$or": [
                { "category_id": { "$exists": false } },
                { "category_id": "" },
                { "category_id": Bson::Null },
            ]
        };
        self.count_matching("articles.count_uncategorized", filter)
            .await
    }

    async fn published_counts_by_author(&self) -> DomainResult<HashMap<String, u64>> {
        let pipeline = [
            doc! { "$match": { "status": ArticleStatus::Published.as_str() } },
            doc! { "$group": { "_id": "$author_id", "published_articles_count": { "$sum": 1 } } },
        ];
        let cursor = self
            .collection
            .aggregate(pipeline)
            .await
            .map_err(map_mongo("articles.published_counts_by_author"))?;
        collect_counts(cursor, "published_articles_count")
            .await
            .map_err(map_mongo("articles.published_counts_by_author"))
    }
}
