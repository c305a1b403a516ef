use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::services::tags_match,
};

pub struct GetArticlesByTagQuery {
    pub tag: String,
}

impl ArticleQueryService {
    /// Case-insensitive (three-form) tag filter over a full scan. The
    /// repository's own `get_by_tag` is bypassed because backends differ in
    /// case sensitivity.
    pub async fn get_articles_by_tag(
        &self,
        query: GetArticlesByTagQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let tag = query.tag;
        let result = self
            .repo
            .get_all()
            .await
            .map(|articles| {
                articles
                    .into_iter()
                    .filter(|article| tags_match(&article.tags, &tag))
                    .map(ArticleDto::from)
                    .collect()
            })
            .map_err(Into::into);

        self.outcome.record(result, |articles: &Vec<ArticleDto>| {
            format!("{} articles tagged [{tag}] found successfully", articles.len())
        })
    }
}
