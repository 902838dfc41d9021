// src/infrastructure/repositories/mod.rs
mod documents;
mod error;
mod mongo_article;
mod mongo_author;
mod mongo_category;
mod mongo_comment;

pub use error::map_mongo;
pub use mongo_article::MongoArticleRepository;
pub use mongo_author::MongoAuthorRepository;
pub use mongo_category::MongoCategoryRepository;
pub use mongo_comment::MongoCommentRepository;

pub const AUTHORS: &str = "authors";
pub const CATEGORIES: &str = "categories";
pub const ARTICLES: &str = "articles";
pub const COMMENTS: &str = "comments";
