// src/domain/mod.rs
pub mod article;
pub mod author;
pub mod category;
pub mod comment;
pub mod errors;
pub mod ids;
