// tests/support/builders.rs
use chrono::{DateTime, Utc};

use notelify_articles::application::commands::articles::{
    CreateArticleCommand, UpdateArticleCommand,
};
use notelify_articles::application::dto::{ArticleDto, AuthorDto};
use notelify_articles::domain::article::*;

use super::mocks::fixed_now;

pub fn author(author_id: &str) -> AuthorDto {
    AuthorDto {
        author_id: author_id.into(),
        name: format!("Author {author_id}"),
        ..AuthorDto::default()
    }
}

pub fn create_command(title: &str, tags: &[&str], author_id: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(title)
        .body(format!("{title} body"))
        .tags(tags.iter().copied())
        .author(author(author_id))
        .build()
        .expect("title and body are set")
}

/// Update command carrying the full current state of `article` with a new
/// title, as a client editing one field would send it.
pub fn retitle(article: &ArticleDto, title: &str) -> UpdateArticleCommand {
    UpdateArticleCommand {
        id: article.article_id.clone(),
        title: title.into(),
        subtitle: article.subtitle.clone(),
        introduction: article.introduction.clone(),
        body: article.body.clone(),
        tags: article.tags.clone(),
        author: article.author.clone(),
        likes: article.likes,
        dislikes: article.dislikes,
    }
}

/// Fully populated domain article for exercising repositories directly.
pub struct ArticleBuilder {
    id: String,
    title: String,
    body: String,
    tags: Vec<String>,
    author_id: String,
    at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: "Test Article".into(),
            body: "Test body".into(),
            tags: Vec::new(),
            author_id: "u1".into(),
            at: fixed_now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_owned()).collect();
        self
    }

    pub fn author_id(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = author_id.into();
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            subtitle: "sub".into(),
            introduction: "intro".into(),
            body: ArticleBody::new(self.body).unwrap(),
            tags: self.tags,
            publish_date: self.at,
            updated_date: self.at,
            author: Author {
                author_id: AuthorId::new(self.author_id),
                name: "Ada".into(),
                social_links: vec!["https://example.org/ada".into()],
                followers: 3,
                ..Author::default()
            },
            likes: 1,
            dislikes: 0,
        }
    }
}

pub fn changes_for(article: &Article, title: &str, at: DateTime<Utc>) -> ArticleChanges {
    ArticleChanges {
        title: ArticleTitle::new(title).unwrap(),
        subtitle: article.subtitle.clone(),
        introduction: article.introduction.clone(),
        body: article.body.clone(),
        tags: article.tags.clone(),
        author: article.author.clone(),
        likes: article.likes + 1,
        dislikes: article.dislikes,
        updated_date: at,
    }
}
