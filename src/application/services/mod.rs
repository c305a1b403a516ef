// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{logging::LogSink, time::Clock, util::ArticleIdGenerator},
        queries::articles::ArticleQueryService,
    },
    domain::article::ArticleRepository,
};

/// Entry point bundling the eight article operations: writes on
/// `article_commands`, reads on `article_queries`.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        id_generator: Arc<dyn ArticleIdGenerator>,
        clock: Arc<dyn Clock>,
        log_sink: Arc<dyn LogSink>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&id_generator),
            Arc::clone(&clock),
            Arc::clone(&log_sink),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_repo),
            Arc::clone(&log_sink),
        ));

        Self {
            article_commands,
            article_queries,
        }
    }
}
