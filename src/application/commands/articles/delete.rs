// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let label = command.id.clone();
        let result = async {
            let id = ArticleId::new(command.id)?;
            self.repo.delete(&id).await?;
            Ok::<_, ApplicationError>(())
        }
        .await;

        self.outcome
            .record(result, |_| format!("article [{label}] deleted successfully"))
    }

    /// Removes every article. An already-empty store is reported as
    /// `EmptyCollection` rather than treated as success.
    pub async fn delete_all_articles(&self) -> ApplicationResult<()> {
        let result = self.repo.delete_all().await.map_err(Into::into);
        self.outcome
            .record(result, |_| "all articles deleted successfully".to_string())
    }
}
