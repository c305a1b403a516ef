// src/application/ports/logging.rs
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("INFO"),
            Self::Error => f.write_str("ERROR"),
        }
    }
}

/// One structured outcome record emitted by the service layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEvent {
    #[serde(rename = "log_level")]
    pub level: LogLevel,
    pub service: String,
    pub message: String,
}

impl LogEvent {
    pub fn info(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Info,
            service: service.into(),
            message: message.into(),
        }
    }

    pub fn error(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Error,
            service: service.into(),
            message: message.into(),
        }
    }
}

/// Best-effort sink. Implementations must return promptly and swallow their
/// own delivery failures.
pub trait LogSink: Send + Sync {
    fn emit(&self, event: LogEvent);
}
