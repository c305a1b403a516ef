// src/application/outcome.rs
use std::sync::Arc;

use crate::application::{
    ApplicationResult,
    ports::logging::{LogEvent, LogSink},
};

/// Service name attached to every event the article services emit.
pub const SERVICE_NAME: &str = "articles";

/// Records one log event per operation outcome, then hands the outcome back
/// untouched.
#[derive(Clone)]
pub struct OutcomeLogger {
    sink: Arc<dyn LogSink>,
}

impl OutcomeLogger {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    pub fn record<T>(
        &self,
        result: ApplicationResult<T>,
        success: impl FnOnce(&T) -> String,
    ) -> ApplicationResult<T> {
        let event = match &result {
            Ok(value) => LogEvent::info(SERVICE_NAME, success(value)),
            Err(err) => LogEvent::error(SERVICE_NAME, err.to_string()),
        };
        self.sink.emit(event);
        result
    }
}
