pub mod analytics;
pub mod articles;
pub mod authors;
pub mod categories;
pub mod comments;
pub mod search;
