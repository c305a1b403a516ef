// src/infrastructure/logging/tracing_sink.rs
use crate::application::ports::logging::{LogEvent, LogLevel, LogSink};

/// Forwards service outcome events into the process `tracing` pipeline.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn emit(&self, event: LogEvent) {
        match event.level {
            LogLevel::Info => {
                tracing::info!(target: "articles::outcome", service = %event.service, "{}", event.message);
            }
            LogLevel::Error => {
                tracing::error!(target: "articles::outcome", service = %event.service, "{}", event.message);
            }
        }
    }
}
