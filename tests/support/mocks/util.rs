// tests/support/mocks/util.rs
use notelify_articles::application::ports::util::ArticleIdGenerator;
use notelify_articles::domain::article::ArticleId;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out `article-1`, `article-2`, ... in call order.
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl ArticleIdGenerator for SequentialIds {
    fn next_id(&self) -> ArticleId {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        ArticleId::new(format!("article-{n}")).expect("generated id is never blank")
    }
}
