// src/application/ports/util.rs
use crate::domain::article::ArticleId;

pub trait ArticleIdGenerator: Send + Sync {
    /// Produce an identifier that has never been issued before.
    fn next_id(&self) -> ArticleId;
}
