// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        outcome::OutcomeLogger,
        ports::{logging::LogSink, time::Clock, util::ArticleIdGenerator},
    },
    domain::article::ArticleRepository,
};

pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) ids: Arc<dyn ArticleIdGenerator>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) outcome: OutcomeLogger,
}

impl ArticleCommandService {
    pub fn new(
        repo: Arc<dyn ArticleRepository>,
        ids: Arc<dyn ArticleIdGenerator>,
        clock: Arc<dyn Clock>,
        log_sink: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            repo,
            ids,
            clock,
            outcome: OutcomeLogger::new(log_sink),
        }
    }
}
