// src/application/commands/comments/mod.rs
mod create;
mod delete;
mod moderate;
mod service;

pub use create::CreateCommentCommand;
pub use delete::DeleteCommentCommand;
pub use moderate::SetApprovalCommand;
pub use service::CommentCommandService;
