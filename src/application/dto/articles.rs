use crate::domain::article::{Article, Author, AuthorId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Embedded author snapshot as exchanged with callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub profile_picture: String,
    #[serde(default)]
    pub social_links: Vec<String>,
    #[serde(default)]
    pub followers: i32,
    #[serde(default)]
    pub following: i32,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            author_id: author.author_id.into_inner(),
            name: author.name,
            bio: author.bio,
            profile_picture: author.profile_picture,
            social_links: author.social_links,
            followers: author.followers,
            following: author.following,
        }
    }
}

impl From<AuthorDto> for Author {
    fn from(dto: AuthorDto) -> Self {
        Self {
            author_id: AuthorId::new(dto.author_id),
            name: dto.name,
            bio: dto.bio,
            profile_picture: dto.profile_picture,
            social_links: dto.social_links,
            followers: dto.followers,
            following: dto.following,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub article_id: String,
    pub title: String,
    pub subtitle: String,
    pub introduction: String,
    pub body: String,
    pub tags: Vec<String>,
    pub publish_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    pub author: AuthorDto,
    pub likes: i32,
    pub dislikes: i32,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            article_id: article.id.into_inner(),
            title: article.title.into_inner(),
            subtitle: article.subtitle,
            introduction: article.introduction,
            body: article.body.into_inner(),
            tags: article.tags,
            publish_date: article.publish_date,
            updated_date: article.updated_date,
            author: article.author.into(),
            likes: article.likes,
            dislikes: article.dislikes,
        }
    }
}
