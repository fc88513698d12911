//! Shared utilities for integration testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use vigil::heartbeat::HeartbeatSink;

/// Sink that records every heartbeat line for later assertions.
pub struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            lines: Mutex::new(Vec::new()),
        })
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.lines.lock().unwrap().len()
    }
}

impl HeartbeatSink for RecordingSink {
    fn emit(&self, line: &str) -> std::io::Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

/// Advance the paused Tokio clock and give background tasks a chance
/// to observe the new time.
#[allow(dead_code)]
pub async fn advance(duration: Duration) {
    tokio::time::advance(duration).await;
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}
