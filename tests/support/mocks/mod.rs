// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod logging;
pub mod repos;
pub mod time;
pub mod util;

pub use logging::CapturingLogSink;
pub use repos::FailingArticleRepo;
pub use time::{SteppingClock, fixed_now};
pub use util::SequentialIds;
