use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    /// Full collection, in whatever order the backend returns it.
    pub async fn get_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let result = self
            .repo
            .get_all()
            .await
            .map(|articles| articles.into_iter().map(Into::into).collect())
            .map_err(Into::into);

        self.outcome.record(result, |articles: &Vec<ArticleDto>| {
            format!("{} articles found successfully", articles.len())
        })
    }
}
