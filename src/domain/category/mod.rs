pub mod entity;
pub mod repository;
pub mod value_objects;

pub use crate::domain::ids::CategoryId;
pub use entity::{Category, NewCategory};
pub use repository::CategoryRepository;
pub use value_objects::CategoryName;
