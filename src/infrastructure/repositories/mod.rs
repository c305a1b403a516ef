// src/infrastructure/repositories/mod.rs
mod documents;
mod error;
mod memory_article;
mod postgres_article;
mod redis_article;

pub use documents::{ArticleDocument, AuthorDocument};
pub use error::map_sqlx;
pub use memory_article::InMemoryArticleRepository;
pub use postgres_article::PostgresArticleRepository;
pub use redis_article::RedisArticleRepository;
