// src/infrastructure/repositories/mongo_comment.rs
use super::{
    ARTICLES, COMMENTS,
    documents::{
        bson_id, collect_counts, contains_pattern, decode_all, document_id, object_id,
        required_datetime, stored_str, to_bson_datetime,
    },
    map_mongo,
};
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentContent, CommentFilter, CommentId, CommentRepository, CommenterName,
    NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Bson, Document, doc},
};
use std::collections::HashMap;

#[derive(Clone)]
pub struct MongoCommentRepository {
    collection: Collection<Document>,
}

impl MongoCommentRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COMMENTS),
        }
    }
}

fn comment_from_document(doc: Document) -> DomainResult<Comment> {
    Ok(Comment {
        id: CommentId::from_stored(document_id(&doc)?),
        article_id: ArticleId::from_stored(stored_str(&doc, "article_id")),
        author_name: CommenterName::from_stored(stored_str(&doc, "author_name")),
        content: CommentContent::from_stored(stored_str(&doc, "content")),
        created_at: required_datetime(&doc, "created_at")?,
        is_approved: doc.get_bool("is_approved").unwrap_or(false),
    })
}

fn filter_document(filter: &CommentFilter) -> Document {
    let mut query = Document::new();
    if let Some(article_id) = &filter.article_id {
        query.insert("article_id", article_id.as_str());
    }
    if let Some(approved) = filter.is_approved {
        query.insert("is_approved", approved);
    }
    query
}

/// Joins comments to their article and groups them by the article's author.
///
/// `$convert` turns malformed article ids into null instead of aborting the
/// whole aggregation; those comments then drop out at `$unwind`.
fn counts_by_author_pipeline() -> Vec<Document> {
    vec![
        doc! {
            "$addFields": {
                "article_oid": {
                    "$convert": {
                        "input": "$article_id",
                        "to": "objectId",
                        "onError": Bson::Null,
                        "onNull": Bson::Null,
                    }
                }
            }
        },
        doc! {
            "$lookup": {
                "from": ARTICLES,
                "localField": "article_oid",
                "foreignField": "_id",
                "as": "article",
            }
        },
        doc! { "$unwind": "$article" },
        doc! { "$group": { "_id": "$article.author_id", "total_comments": { "$sum": 1 } } },
    ]
}

#[async_trait]
impl CommentRepository for MongoCommentRepository {
    async fn find_duplicate(
        &self,
        article_id: &ArticleId,
        author_name: &CommenterName,
        content: &CommentContent,
    ) -> DomainResult<Option<Comment>> {
        let found = self
            .collection
            .find_one(doc! {
                "article_id": article_id.as_str(),
                "author_name": author_name.as_str(),
                "content": content.as_str(),
            })
            .await
            .map_err(map_mongo("comments.find_duplicate"))?;
        found.map(comment_from_document).transpose()
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<CommentId> {
        let result = self
            .collection
            .insert_one(doc! {
                "article_id": comment.article_id.into_inner(),
                "author_name": comment.author_name.into_inner(),
                "content": comment.content.into_inner(),
                "created_at": to_bson_datetime(comment.created_at),
                "is_approved": comment.is_approved,
            })
            .await
            .map_err(map_mongo("comments.insert"))?;
        let id = bson_id(&result.inserted_id)
            .ok_or_else(|| DomainError::persistence("comments.insert: unexpected id type"))?;
        CommentId::new(id)
    }

    async fn list(&self, filter: &CommentFilter) -> DomainResult<Vec<Comment>> {
        let docs: Vec<Document> = self
            .collection
            .find(filter_document(filter))
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(map_mongo("comments.list"))?
            .try_collect()
            .await
            .map_err(map_mongo("comments.list"))?;
        Ok(decode_all(COMMENTS, docs, comment_from_document))
    }

    async fn set_approval(&self, id: &CommentId, approved: bool) -> DomainResult<u64> {
        let Some(oid) = object_id(id.as_str()) else {
            return Ok(0);
        };
        let result = self
            .collection
            .update_one(
                doc! { "_id": oid },
                doc! { "$set": { "is_approved": approved } },
            )
            .await
            .map_err(map_mongo("comments.set_approval"))?;
        Ok(result.modified_count)
    }

    async fn delete(&self, id: &CommentId) -> DomainResult<u64> {
        let Some(oid) = object_id(id.as_str()) else {
            return Ok(0);
        };
        let result = self
            .collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(map_mongo("comments.delete"))?;
        Ok(result.deleted_count)
    }

    async fn search(&self, needle: &str, limit: usize) -> DomainResult<Vec<Comment>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let docs: Vec<Document> = self
            .collection
            .find(doc! { "content": contains_pattern(needle) })
            .limit(limit)
            .await
            .map_err(map_mongo("comments.search"))?
            .try_collect()
            .await
            .map_err(map_mongo("comments.search"))?;
        Ok(decode_all(COMMENTS, docs, comment_from_document))
    }

    async fn count(&self, approved: Option<bool>) -> DomainResult<u64> {
        let filter = match approved {
            Some(approved) => doc! { "is_approved": approved },
            None => doc! {},
        };
        self.collection
            .count_documents(filter)
            .await
            .map_err(map_mongo("comments.count"))
    }

    async fn counts_by_article_author(&self) -> DomainResult<HashMap<String, u64>> {
        let cursor = self
            .collection
            .aggregate(counts_by_author_pipeline())
            .await
            .map_err(map_mongo("comments.counts_by_article_author"))?;
        collect_counts(cursor, "total_comments")
            .await
            .map_err(map_mongo("comments.counts_by_article_author"))
    }
}
