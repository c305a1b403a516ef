use std::sync::Arc;

use crate::{
    application::{outcome::OutcomeLogger, ports::logging::LogSink},
    domain::article::ArticleRepository,
};

pub struct ArticleQueryService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) outcome: OutcomeLogger,
}

impl ArticleQueryService {
    pub fn new(repo: Arc<dyn ArticleRepository>, log_sink: Arc<dyn LogSink>) -> Self {
        Self {
            repo,
            outcome: OutcomeLogger::new(log_sink),
        }
    }
}
