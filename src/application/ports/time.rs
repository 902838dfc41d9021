// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the timestamps stamped on records (`created_at`, `updated_at`,
/// `published_at`, registration dates).
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
