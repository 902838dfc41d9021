pub mod entity;
pub mod lifecycle;
pub mod repository;
pub mod value_objects;

pub use crate::domain::ids::ArticleId;
pub use entity::{Article, ArticleUpdate, NewArticle};
pub use lifecycle::PublishedAtChange;
pub use repository::{ArticleFilter, ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleStatus, ArticleTitle};
