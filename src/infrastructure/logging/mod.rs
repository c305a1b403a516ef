// src/infrastructure/logging/mod.rs
mod fanout;
mod http_sink;
mod tracing_sink;

pub use fanout::FanoutLogSink;
pub use http_sink::{HttpLogSink, HttpLogSinkError};
pub use tracing_sink::TracingLogSink;
