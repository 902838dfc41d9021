// src/domain/ids.rs
//! Identifiers of stored records.
//!
//! References between entities are soft: an article only carries the string id
//! of its author and category, a comment the id of its article. Nothing here
//! guarantees the referenced record exists; readers resolve them lazily and must
//! cope with a miss.
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::Validation(
                        concat!($label, " id cannot be empty").into(),
                    ));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Wraps a value read back from the store without validating it.
            pub fn from_stored(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

record_id!(AuthorId, "author");
record_id!(CategoryId, "category");
record_id!(ArticleId, "article");
record_id!(CommentId, "comment");

impl CategoryId {
    /// Empty or whitespace-only input means "no category" rather than an error.
    pub fn optional(value: Option<String>) -> Option<Self> {
        value.and_then(|raw| Self::new(raw).ok())
    }
}
