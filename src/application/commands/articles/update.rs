// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthorDto},
        error::ApplicationResult,
    },
    domain::article::{ArticleBody, ArticleChanges, ArticleId, ArticleTitle},
};

/// Complete desired state of an article. Every field replaces the stored
/// value; nothing is merged.
pub struct UpdateArticleCommand {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub introduction: String,
    pub body: String,
    pub tags: Vec<String>,
    pub author: AuthorDto,
    pub likes: i32,
    pub dislikes: i32,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let result = self.replace_article(command).await;
        self.outcome.record(result, |article| {
            format!("article [{}] updated successfully", article.article_id)
        })
    }

    async fn replace_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand {
            id,
            title,
            subtitle,
            introduction,
            body,
            tags,
            author,
            likes,
            dislikes,
        } = command;

        let id = ArticleId::new(id)?;
        let changes = ArticleChanges {
            title: ArticleTitle::new(title)?,
            subtitle,
            introduction,
            body: ArticleBody::new(body)?,
            tags,
            author: author.into(),
            likes,
            dislikes,
            updated_date: self.clock.now(),
        };

        let updated = self.repo.update(&id, changes).await?;
        Ok(updated.into())
    }
}
