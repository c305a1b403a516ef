// src/application/ports/mod.rs
pub mod logging;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type ArticleIdGeneratorPort = dyn util::ArticleIdGenerator;
pub type LogSinkPort = dyn logging::LogSink;
