// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthorDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleBody, ArticleTitle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub subtitle: String,
    pub introduction: String,
    pub body: String,
    pub tags: Vec<String>,
    pub author: AuthorDto,
    pub likes: i32,
    pub dislikes: i32,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    subtitle: String,
    introduction: String,
    body: Option<String>,
    tags: Vec<String>,
    author: AuthorDto,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn introduction(mut self, introduction: impl Into<String>) -> Self {
        self.introduction = introduction.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn author(mut self, author: AuthorDto) -> Self {
        self.author = author;
        self
    }

    pub fn build(self) -> ApplicationResult<CreateArticleCommand> {
        Ok(CreateArticleCommand {
            title: self
                .title
                .ok_or_else(|| ApplicationError::validation("title is required"))?,
            subtitle: self.subtitle,
            introduction: self.introduction,
            body: self
                .body
                .ok_or_else(|| ApplicationError::validation("body is required"))?,
            tags: self.tags,
            author: self.author,
            likes: 0,
            dislikes: 0,
        })
    }
}

impl ArticleCommandService {
    /// Assigns a fresh id and both timestamps, then persists the article.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let result = self.insert_article(command).await;
        self.outcome.record(result, |article| {
            format!("article [{}] created successfully", article.article_id)
        })
    }

    async fn insert_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let now = self.clock.now();

        let article = Article {
            id: self.ids.next_id(),
            title,
            subtitle: command.subtitle,
            introduction: command.introduction,
            body,
            tags: command.tags,
            publish_date: now,
            updated_date: now,
            author: command.author.into(),
            likes: command.likes,
            dislikes: command.dislikes,
        };

        let created = self.repo.create(article).await?;
        Ok(created.into())
    }
}
