use crate::application::ports::util::ArticleIdGenerator;
use crate::domain::article::ArticleId;
use uuid::Uuid;

/// Random (v4) identifiers; not derived from content.
#[derive(Default, Clone)]
pub struct UuidArticleIdGenerator;

impl ArticleIdGenerator for UuidArticleIdGenerator {
    fn next_id(&self) -> ArticleId {
        ArticleId::from_uuid(Uuid::new_v4())
    }
}
