use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let result = async {
            let id = ArticleId::new(query.id)?;
            let article = self.repo.get_by_id(&id).await?;
            Ok::<_, ApplicationError>(ArticleDto::from(article))
        }
        .await;

        self.outcome.record(result, |article| {
            format!("article [{}] found successfully", article.article_id)
        })
    }
}
