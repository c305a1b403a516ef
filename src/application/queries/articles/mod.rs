mod by_author;
mod by_tag;
mod get_by_id;
mod list;
mod service;

pub use by_author::GetArticlesByAuthorQuery;
pub use by_tag::GetArticlesByTagQuery;
pub use get_by_id::GetArticleByIdQuery;
pub use service::ArticleQueryService;
