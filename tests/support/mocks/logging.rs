// tests/support/mocks/logging.rs
use notelify_articles::application::ports::logging::{LogEvent, LogLevel, LogSink};
use std::sync::Mutex;

#[derive(Default)]
pub struct CapturingLogSink {
    events: Mutex<Vec<LogEvent>>,
}

impl CapturingLogSink {
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<LogEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.level == level)
            .count()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl LogSink for CapturingLogSink {
    fn emit(&self, event: LogEvent) {
        self.events.lock().unwrap().push(event);
    }
}
