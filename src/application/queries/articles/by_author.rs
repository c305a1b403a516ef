use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::AuthorId,
};

pub struct GetArticlesByAuthorQuery {
    pub author_id: String,
}

impl ArticleQueryService {
    pub async fn get_articles_by_author(
        &self,
        query: GetArticlesByAuthorQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let author_id = AuthorId::new(query.author_id);
        let result = self
            .repo
            .get_by_author(&author_id)
            .await
            .map(|articles| articles.into_iter().map(Into::into).collect())
            .map_err(Into::into);

        self.outcome.record(result, |articles: &Vec<ArticleDto>| {
            format!(
                "{} articles by author [{author_id}] found successfully",
                articles.len()
            )
        })
    }
}
