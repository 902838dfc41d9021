// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failure of a command or query.
///
/// Dedup hits are not errors here: create operations report them in their
/// `CreatedDto` and still succeed.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request input rejected before reaching the store.
    #[error("validation error: {0}")]
    Validation(String),

    /// The addressed record does not exist or its id is malformed.
    #[error("resource not found: {0}")]
    NotFound(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
