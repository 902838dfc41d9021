// src/domain/author/entity.rs
use crate::domain::author::value_objects::FullName;
use crate::domain::ids::AuthorId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Author {
    pub id: AuthorId,
    pub full_name: FullName,
    pub email: String,
    pub registration_date: DateTime<Utc>,
}

/// Authors are immutable once stored; there is no update counterpart.
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub full_name: FullName,
    pub email: String,
    pub registration_date: DateTime<Utc>,
}
