// tests/support/mocks/repos.rs
use async_trait::async_trait;
use notelify_articles::domain::article::{
    Article, ArticleChanges, ArticleId, ArticleRepository, AuthorId,
};
use notelify_articles::domain::errors::{DomainError, DomainResult};

/// Every call fails as if the database were unreachable.
pub struct FailingArticleRepo;

fn down<T>() -> DomainResult<T> {
    Err(DomainError::Storage("connection refused".into()))
}

#[async_trait]
impl ArticleRepository for FailingArticleRepo {
    async fn create(&self, _article: Article) -> DomainResult<Article> {
        down()
    }

    async fn get_by_id(&self, _id: &ArticleId) -> DomainResult<Article> {
        down()
    }

    async fn get_by_author(&self, _author_id: &AuthorId) -> DomainResult<Vec<Article>> {
        down()
    }

    async fn get_by_tag(&self, _tag: &str) -> DomainResult<Vec<Article>> {
        down()
    }

    async fn get_all(&self) -> DomainResult<Vec<Article>> {
        down()
    }

    async fn update(&self, _id: &ArticleId, _changes: ArticleChanges) -> DomainResult<Article> {
        down()
    }

    async fn delete(&self, _id: &ArticleId) -> DomainResult<()> {
        down()
    }

    async fn delete_all(&self) -> DomainResult<()> {
        down()
    }
}
