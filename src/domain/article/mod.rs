pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleChanges, Author};
pub use repository::ArticleRepository;
pub use value_objects::{ArticleBody, ArticleId, ArticleTitle, AuthorId};
