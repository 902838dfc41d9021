// src/application/commands/articles/mod.rs
mod create;
mod service;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use service::ArticleCommandService;
pub use update::{UpdateArticleCommand, UpdateArticleStatusCommand};
