// src/infrastructure/repositories/documents.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::article::{Article, ArticleBody, ArticleId, ArticleTitle, Author, AuthorId};
use crate::domain::errors::{DomainError, DomainResult};

/// Persisted author shape, shared by the JSONB column and the Redis
/// documents.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorDocument {
    pub author_id: String,
    pub name: String,
    pub bio: String,
    pub profile_picture: String,
    pub social_links: Vec<String>,
    pub followers: i32,
    pub following: i32,
}

impl From<&Author> for AuthorDocument {
    fn from(author: &Author) -> Self {
        Self {
            author_id: author.author_id.as_str().to_owned(),
            name: author.name.clone(),
            bio: author.bio.clone(),
            profile_picture: author.profile_picture.clone(),
            social_links: author.social_links.clone(),
            followers: author.followers,
            following: author.following,
        }
    }
}

impl From<AuthorDocument> for Author {
    fn from(doc: AuthorDocument) -> Self {
        Self {
            author_id: AuthorId::new(doc.author_id),
            name: doc.name,
            bio: doc.bio,
            profile_picture: doc.profile_picture,
            social_links: doc.social_links,
            followers: doc.followers,
            following: doc.following,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDocument {
    pub article_id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub introduction: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub publish_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    pub author: AuthorDocument,
    #[serde(default)]
    pub likes: i32,
    #[serde(default)]
    pub dislikes: i32,
}

impl ArticleDocument {
    pub fn to_json(&self) -> DomainResult<String> {
        serde_json::to_string(self)
            .map_err(|err| DomainError::Storage(format!("failed to encode article: {err}")))
    }

    pub fn from_json(raw: &str) -> DomainResult<Self> {
        serde_json::from_str(raw)
            .map_err(|err| DomainError::Storage(format!("corrupt article document: {err}")))
    }
}

impl From<&Article> for ArticleDocument {
    fn from(article: &Article) -> Self {
        Self {
            article_id: article.id.as_str().to_owned(),
            title: article.title.as_str().to_owned(),
            subtitle: article.subtitle.clone(),
            introduction: article.introduction.clone(),
            body: article.body.as_str().to_owned(),
            tags: article.tags.clone(),
            publish_date: article.publish_date,
            updated_date: article.updated_date,
            author: AuthorDocument::from(&article.author),
            likes: article.likes,
            dislikes: article.dislikes,
        }
    }
}

impl TryFrom<ArticleDocument> for Article {
    type Error = DomainError;

    fn try_from(doc: ArticleDocument) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(doc.article_id)?,
            title: ArticleTitle::new(doc.title)?,
            subtitle: doc.subtitle,
            introduction: doc.introduction,
            body: ArticleBody::new(doc.body)?,
            tags: doc.tags,
            publish_date: doc.publish_date,
            updated_date: doc.updated_date,
            author: doc.author.into(),
            likes: doc.likes,
            dislikes: doc.dislikes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn author_document_has_the_stored_json_shape() {
        let author = Author {
            author_id: AuthorId::new("u1"),
            name: "Ada".into(),
            bio: "math".into(),
            profile_picture: "ada.png".into(),
            social_links: vec!["https://example.org/ada".into()],
            followers: 10,
            following: 2,
        };

        let value = serde_json::to_value(AuthorDocument::from(&author)).unwrap();
        assert_eq!(
            value,
            json!({
                "author_id": "u1",
                "name": "Ada",
                "bio": "math",
                "profile_picture": "ada.png",
                "social_links": ["https://example.org/ada"],
                "followers": 10,
                "following": 2
            })
        );
    }

    #[test]
    fn missing_author_fields_fall_back_to_defaults() {
        let doc: AuthorDocument = serde_json::from_value(json!({ "author_id": "u9" })).unwrap();
        let author = Author::from(doc);
        assert_eq!(author.author_id.as_str(), "u9");
        assert!(author.social_links.is_empty());
        assert_eq!(author.followers, 0);
    }

    #[test]
    fn corrupt_article_json_is_a_storage_error() {
        assert!(matches!(
            ArticleDocument::from_json("{not json"),
            Err(DomainError::Storage(_))
        ));
    }
}
