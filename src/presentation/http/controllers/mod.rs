// src/presentation/http/controllers/mod.rs
pub mod analytics;
pub mod articles;
pub mod authors;
pub mod categories;
pub mod comments;
pub mod search;
