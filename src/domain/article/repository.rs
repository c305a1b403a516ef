use crate::domain::article::entity::{Article, ArticleChanges};
use crate::domain::article::value_objects::{ArticleId, AuthorId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Storage contract shared by every article backend.
///
/// Backends never log; failures are returned as [`DomainError`] values so the
/// service layer can record them.
///
/// [`DomainError`]: crate::domain::errors::DomainError
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Persist a fully populated article (id and timestamps already set).
    async fn create(&self, article: Article) -> DomainResult<Article>;

    /// Fails with `NotFound` when no record carries `id`.
    async fn get_by_id(&self, id: &ArticleId) -> DomainResult<Article>;

    /// Articles whose embedded author matches. Empty is not an error.
    async fn get_by_author(&self, author_id: &AuthorId) -> DomainResult<Vec<Article>>;

    /// Articles whose tag list contains `tag` under this backend's matching
    /// rule. The bundled backends compare exactly and case-sensitively.
    async fn get_by_tag(&self, tag: &str) -> DomainResult<Vec<Article>>;

    /// Full scan, no ordering guarantee.
    async fn get_all(&self) -> DomainResult<Vec<Article>>;

    /// Read-modify-write replacement of every mutable field.
    async fn update(&self, id: &ArticleId, changes: ArticleChanges) -> DomainResult<Article>;

    async fn delete(&self, id: &ArticleId) -> DomainResult<()>;

    /// Fails with `EmptyCollection` when there is nothing to remove.
    async fn delete_all(&self) -> DomainResult<()>;
}
