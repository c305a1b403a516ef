// src/infrastructure/repositories/memory_article.rs
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::article::{Article, ArticleChanges, ArticleId, ArticleRepository, AuthorId};
use crate::domain::errors::{DomainError, DomainResult};

/// Process-local store for the `memory` backend and for tests. Keeps
/// insertion order.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    articles: RwLock<Vec<Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> DomainError {
    DomainError::Storage("article store lock poisoned".into())
}

fn not_found(id: &ArticleId) -> DomainError {
    DomainError::NotFound(format!("article {id} not found"))
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn create(&self, article: Article) -> DomainResult<Article> {
        let mut articles = self.articles.write().map_err(poisoned)?;
        if articles.iter().any(|a| a.id == article.id) {
            return Err(DomainError::Storage("article already exists".into()));
        }
        articles.push(article.clone());
        Ok(article)
    }

    async fn get_by_id(&self, id: &ArticleId) -> DomainResult<Article> {
        let articles = self.articles.read().map_err(poisoned)?;
        articles
            .iter()
            .find(|a| &a.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn get_by_author(&self, author_id: &AuthorId) -> DomainResult<Vec<Article>> {
        let articles = self.articles.read().map_err(poisoned)?;
        Ok(articles
            .iter()
            .filter(|a| a.author_id() == author_id)
            .cloned()
            .collect())
    }

    async fn get_by_tag(&self, tag: &str) -> DomainResult<Vec<Article>> {
        let articles = self.articles.read().map_err(poisoned)?;
        Ok(articles
            .iter()
            .filter(|a| a.tags.iter().any(|t| t == tag))
            .cloned()
            .collect())
    }

    async fn get_all(&self) -> DomainResult<Vec<Article>> {
        let articles = self.articles.read().map_err(poisoned)?;
        Ok(articles.clone())
    }

    async fn update(&self, id: &ArticleId, changes: ArticleChanges) -> DomainResult<Article> {
        let mut articles = self.articles.write().map_err(poisoned)?;
        let article = articles
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or_else(|| not_found(id))?;
        article.apply(changes);
        Ok(article.clone())
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<()> {
        let mut articles = self.articles.write().map_err(poisoned)?;
        let position = articles
            .iter()
            .position(|a| &a.id == id)
            .ok_or_else(|| not_found(id))?;
        articles.remove(position);
        Ok(())
    }

    async fn delete_all(&self) -> DomainResult<()> {
        let mut articles = self.articles.write().map_err(poisoned)?;
        if articles.is_empty() {
            return Err(DomainError::EmptyCollection(
                "there are no articles to delete".into(),
            ));
        }
        articles.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleBody, ArticleTitle, Author};
    use chrono::Utc;

    fn article(id: &str, author: &str, tags: &[&str]) -> Article {
        let now = Utc::now();
        Article {
            id: ArticleId::new(id).unwrap(),
            title: ArticleTitle::new(format!("title {id}")).unwrap(),
            subtitle: String::new(),
            introduction: String::new(),
            body: ArticleBody::new("body").unwrap(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            publish_date: now,
            updated_date: now,
            author: Author {
                author_id: AuthorId::new(author),
                ..Author::default()
            },
            likes: 0,
            dislikes: 0,
        }
    }

    #[tokio::test]
    async fn duplicate_ids_are_rejected() {
        let repo = InMemoryArticleRepository::new();
        repo.create(article("a", "u1", &[])).await.unwrap();
        let err = repo.create(article("a", "u2", &[])).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }

    #[tokio::test]
    async fn author_and_tag_lookups_are_exact() {
        let repo = InMemoryArticleRepository::new();
        repo.create(article("a", "u1", &["Go"])).await.unwrap();
        repo.create(article("b", "u2", &["go", "Rust"])).await.unwrap();

        let by_author = repo.get_by_author(&AuthorId::new("u1")).await.unwrap();
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].id.as_str(), "a");

        let by_tag = repo.get_by_tag("go").await.unwrap();
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].id.as_str(), "b");
    }

    #[tokio::test]
    async fn missing_ids_and_empty_store_are_reported() {
        let repo = InMemoryArticleRepository::new();
        let id = ArticleId::new("ghost").unwrap();

        assert!(matches!(repo.get_by_id(&id).await, Err(DomainError::NotFound(_))));
        assert!(matches!(repo.delete(&id).await, Err(DomainError::NotFound(_))));
        assert!(matches!(
            repo.delete_all().await,
            Err(DomainError::EmptyCollection(_))
        ));
    }
}
