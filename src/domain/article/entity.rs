// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle, AuthorId};
use chrono::{DateTime, Utc};

/// Denormalized snapshot of the author stored inside every article.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Author {
    pub author_id: AuthorId,
    pub name: String,
    pub bio: String,
    pub profile_picture: String,
    pub social_links: Vec<String>,
    pub followers: i32,
    pub following: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub subtitle: String,
    pub introduction: String,
    pub body: ArticleBody,
    pub tags: Vec<String>,
    pub publish_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    pub author: Author,
    pub likes: i32,
    pub dislikes: i32,
}

impl Article {
    pub fn author_id(&self) -> &AuthorId {
        &self.author.author_id
    }

    /// Overlay every mutable field with the supplied values. Fields absent
    /// from the caller's payload arrive here as their empty defaults and
    /// erase what was stored.
    pub fn apply(&mut self, changes: ArticleChanges) {
        let ArticleChanges {
            title,
            subtitle,
            introduction,
            body,
            tags,
            author,
            likes,
            dislikes,
            updated_date,
        } = changes;

        self.title = title;
        self.subtitle = subtitle;
        self.introduction = introduction;
        self.body = body;
        self.tags = tags;
        self.author = author;
        self.likes = likes;
        self.dislikes = dislikes;
        self.updated_date = updated_date;
    }
}

/// Full replacement state for an update. `id` and `publish_date` are not
/// part of it and never change.
#[derive(Debug, Clone)]
pub struct ArticleChanges {
    pub title: ArticleTitle,
    pub subtitle: String,
    pub introduction: String,
    pub body: ArticleBody,
    pub tags: Vec<String>,
    pub author: Author,
    pub likes: i32,
    pub dislikes: i32,
    pub updated_date: DateTime<Utc>,
}
