// src/domain/article/lifecycle.rs
//! Publication lifecycle rules.
//!
//! An article carries a `published_at` timestamp if and only if its status is
//! [`ArticleStatus::Published`]. New articles are normalized first and checked
//! afterwards; updates never rebuild the whole record, so they compute a
//! [`PublishedAtChange`] against the stored value instead.
use crate::domain::article::value_objects::ArticleStatus;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

pub const PUBLISH_DATE_REQUIRES_PUBLISHED: &str = "publish date only valid for published status";

/// Normalizes a candidate `published_at` for the given status.
///
/// Anything supplied for a non-published status is dropped; a published article
/// without a timestamp gets `now`.
pub fn normalize_published_at(
    status: ArticleStatus,
    supplied: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    if status.is_published() {
        Some(supplied.unwrap_or(now))
    } else {
        None
    }
}

/// Rejects a publish date on anything but a published article.
pub fn ensure_consistent(
    status: ArticleStatus,
    published_at: Option<DateTime<Utc>>,
) -> DomainResult<()> {
    if published_at.is_some() && !status.is_published() {
        return Err(DomainError::Validation(
            PUBLISH_DATE_REQUIRES_PUBLISHED.into(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishedAtChange {
    #[default]
    Keep,
    Set(DateTime<Utc>),
    Clear,
}

impl PublishedAtChange {
    /// Change required when an update sets `status`, given what is stored now.
    pub fn for_status(
        status: ArticleStatus,
        current: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        match (status.is_published(), current) {
            (true, Some(_)) => Self::Keep,
            (true, None) => Self::Set(now),
            (false, _) => Self::Clear,
        }
    }

    pub fn apply(self, current: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
        match self {
            Self::Keep => current,
            Self::Set(at) => Some(at),
            Self::Clear => None,
        }
    }
}
