// src/infrastructure/repositories/documents.rs
//! Conversions between stored documents and domain values.
//!
//! Reference fields (`author_id`, `category_id`, `article_id`) are stored as
//! strings holding the hex form of the referenced ObjectId.
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    Cursor,
    bson::{self, Bson, Document, doc, oid::ObjectId},
};
use std::collections::HashMap;

/// Parses a record id; anything that is not a valid ObjectId cannot match.
pub(super) fn object_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw).ok()
}

pub(super) fn bson_id(value: &Bson) -> Option<String> {
    match value {
        Bson::ObjectId(oid) => Some(oid.to_hex()),
        Bson::String(raw) => Some(raw.clone()),
        _ => None,
    }
}

pub(super) fn document_id(doc: &Document) -> DomainResult<String> {
    doc.get("_id")
        .and_then(bson_id)
        .ok_or_else(|| DomainError::persistence("document without usable _id"))
}

pub(super) fn required_str(doc: &Document, key: &str) -> DomainResult<String> {
    doc.get_str(key)
        .map(str::to_string)
        .map_err(|_| DomainError::persistence(format!("document field `{key}` missing or not a string")))
}

/// Text or reference field read as-is; a missing or non-string value reads as empty.
pub(super) fn stored_str(doc: &Document, key: &str) -> String {
    doc.get(key).and_then(bson_id).unwrap_or_default()
}

/// String-or-ObjectId field; empty strings and other types read as absent.
pub(super) fn optional_ref(doc: &Document, key: &str) -> Option<String> {
    doc.get(key)
        .and_then(bson_id)
        .filter(|value| !value.trim().is_empty())
}

pub(super) fn optional_str(doc: &Document, key: &str) -> Option<String> {
    match doc.get(key) {
        Some(Bson::String(value)) => Some(value.clone()),
        _ => None,
    }
}

pub(super) fn to_bson_datetime(value: DateTime<Utc>) -> Bson {
    Bson::DateTime(bson::DateTime::from_millis(value.timestamp_millis()))
}

pub(super) fn optional_datetime(doc: &Document, key: &str) -> Option<DateTime<Utc>> {
    match doc.get(key) {
        Some(Bson::DateTime(value)) => DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis()),
        _ => None,
    }
}

pub(super) fn required_datetime(doc: &Document, key: &str) -> DomainResult<DateTime<Utc>> {
    optional_datetime(doc, key)
        .ok_or_else(|| DomainError::persistence(format!("document field `{key}` missing or not a date")))
}

pub(super) fn optional_datetime_bson(value: Option<DateTime<Utc>>) -> Bson {
    value.map(to_bson_datetime).unwrap_or(Bson::Null)
}

/// Case-insensitive substring match; the needle is matched literally.
pub(super) fn contains_pattern(needle: &str) -> Document {
    doc! { "$regex": regex::escape(needle), "$options": "i" }
}

pub(super) fn count_value(value: Option<&Bson>) -> u64 {
    match value {
        Some(Bson::Int32(n)) => u64::try_from(*n).unwrap_or(0),
        Some(Bson::Int64(n)) => u64::try_from(*n).unwrap_or(0),
        Some(Bson::Double(n)) if *n > 0.0 => *n as u64,
        _ => 0,
    }
}

/// Drains a cursor of `$group` output into `group key -> counter`.
pub(super) async fn collect_counts(
    cursor: Cursor<Document>,
    counter: &str,
) -> Result<HashMap<String, u64>, mongodb::error::Error> {
    let rows: Vec<Document> = cursor.try_collect().await?;
    Ok(rows
        .into_iter()
        .filter_map(|row| {
            let key = row.get("_id").and_then(bson_id)?;
            Some((key, count_value(row.get(counter))))
        })
        .collect())
}

/// Decodes every document, skipping (and logging) those that do not fit the model.
pub(super) fn decode_all<T>(
    collection: &'static str,
    docs: Vec<Document>,
    decode: impl Fn(Document) -> DomainResult<T>,
) -> Vec<T> {
    docs.into_iter()
        .filter_map(|doc| match decode(doc) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(collection, error = %err, "skipping malformed document");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn malformed_ids_do_not_parse() {
        assert!(object_id("not-an-id").is_none());
        assert!(object_id("65f1a2b3c4d5e6f708091a2b").is_some());
    }

    #[test]
    fn datetimes_round_trip_at_millisecond_precision() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let doc = doc! { "created_at": to_bson_datetime(at) };
        assert_eq!(optional_datetime(&doc, "created_at"), Some(at));
    }

    #[test]
    fn null_dates_read_as_absent() {
        let doc = doc! { "published_at": Bson::Null };
        assert_eq!(optional_datetime(&doc, "published_at"), None);
        assert!(required_datetime(&doc, "published_at").is_err());
    }

    #[test]
    fn empty_references_read_as_absent() {
        let doc = doc! { "category_id": "", "author_id": "abc" };
        assert_eq!(optional_ref(&doc, "category_id"), None);
        assert_eq!(optional_ref(&doc, "missing"), None);
        assert_eq!(optional_ref(&doc, "author_id").as_deref(), Some("abc"));
    }

    #[test]
    fn search_pattern_escapes_regex_syntax() {
        let pattern = contains_pattern("c++ (intro)");
        assert_eq!(pattern.get_str("$regex").unwrap(), r"c\+\+ \(intro\)");
        assert_eq!(pattern.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn counters_accept_any_numeric_type() {
        assert_eq!(count_value(Some(&Bson::Int32(3))), 3);
        assert_eq!(count_value(Some(&Bson::Int64(7))), 7);
        assert_eq!(count_value(Some(&Bson::Double(2.0))), 2);
        assert_eq!(count_value(None), 0);
    }
}
