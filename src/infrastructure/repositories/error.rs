// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;
use mongodb::error::ErrorKind;

/// Logs a failed store call with its operation name and converts it into a
/// domain persistence error.
pub fn map_mongo(operation: &'static str) -> impl FnOnce(mongodb::error::Error) -> DomainError {
    move |err| {
        let category = match *err.kind {
            ErrorKind::Authentication { .. } => "authentication",
            ErrorKind::InvalidArgument { .. } => "invalid argument",
            ErrorKind::Io(_) | ErrorKind::ServerSelection { .. } => "connection",
            ErrorKind::Command(_) => "command",
            _ => "driver",
        };
        tracing::error!(operation, category, error = %err, "store operation failed");
        DomainError::Persistence(format!("{operation}: {category} error"))
    }
}
