// src/application/dto/outcomes.rs
//! Result bodies of write operations.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of a create call.
///
/// A dedup hit is not an error: the existing id comes back together with an
/// `error` marker such as `"Author already exists"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedDto {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CreatedDto {
    pub fn created(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            error: None,
        }
    }

    pub fn existing(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            error: Some(message.into()),
        }
    }

    pub fn already_exists(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateResultDto {
    pub success: bool,
    pub modified_count: u64,
}

impl UpdateResultDto {
    pub fn modified(modified_count: u64) -> Self {
        Self {
            success: true,
            modified_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModifiedCountDto {
    pub modified_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteResultDto {
    pub success: bool,
    pub deleted_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeleteResultDto {
    pub fn deleted(deleted_count: u64) -> Self {
        Self {
            success: true,
            deleted_count,
            error: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            success: false,
            deleted_count: 0,
            error: Some(message.into()),
        }
    }
}
