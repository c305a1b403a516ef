// src/infrastructure/logging/http_sink.rs
use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc::{self, error::TrySendError};

use crate::application::ports::logging::{LogEvent, LogSink};

const DEFAULT_CAPACITY: usize = 1024;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum HttpLogSinkError {
    #[error("failed to build log collector client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("http log sink needs a running tokio runtime")]
    NoRuntime,
}

/// Ships events as `{log_level, service, message}` JSON to a remote
/// collector. `emit` only enqueues; a background task does the POSTs.
#[derive(Clone, Debug)]
pub struct HttpLogSink {
    tx: mpsc::Sender<LogEvent>,
}

impl HttpLogSink {
    pub fn spawn(url: impl Into<String>) -> Result<Self, HttpLogSinkError> {
        Self::spawn_with_capacity(url, DEFAULT_CAPACITY)
    }

    pub fn spawn_with_capacity(
        url: impl Into<String>,
        capacity: usize,
    ) -> Result<Self, HttpLogSinkError> {
        let handle =
            tokio::runtime::Handle::try_current().map_err(|_| HttpLogSinkError::NoRuntime)?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let url = url.into();
        let (tx, mut rx) = mpsc::channel::<LogEvent>(capacity.max(1));

        handle.spawn(async move {
            while let Some(event) = rx.recv().await {
                let sent = client
                    .post(&url)
                    .json(&event)
                    .send()
                    .await
                    .and_then(reqwest::Response::error_for_status);
                if let Err(err) = sent {
                    tracing::warn!(collector = %url, error = %err, "failed to deliver log event");
                }
            }
            tracing::debug!(collector = %url, "http log sink stopped");
        });

        Ok(Self { tx })
    }
}

impl LogSink for HttpLogSink {
    fn emit(&self, event: LogEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                tracing::warn!(message = %event.message, "log collector queue full, dropping event");
            }
            Err(TrySendError::Closed(_)) => {
                tracing::warn!("log collector task has stopped, dropping event");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawning_outside_a_runtime_is_an_error() {
        assert!(matches!(
            HttpLogSink::spawn("http://127.0.0.1:9/logs"),
            Err(HttpLogSinkError::NoRuntime)
        ));
    }

    #[tokio::test]
    async fn emit_does_not_fail_when_collector_is_unreachable() {
        let sink = HttpLogSink::spawn_with_capacity("http://127.0.0.1:9/logs", 1)
            .expect("sink should start inside a runtime");
        for n in 0..8 {
            sink.emit(LogEvent::info("articles", format!("event {n}")));
        }
    }
}
