//! Periodic liveness signal.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;

/// Destination for heartbeat lines.
///
/// Production uses [`StdoutSink`]; tests inject a recording sink.
pub trait HeartbeatSink: Send + Sync {
    /// Write one heartbeat line, with a trailing newline.
    fn emit(&self, line: &str) -> std::io::Result<()>;
}

/// Writes heartbeat lines to the process's standard output.
pub struct StdoutSink;

impl HeartbeatSink for StdoutSink {
    fn emit(&self, line: &str) -> std::io::Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", line)
    }
}

/// Errors raised when arming the heartbeat.
#[derive(Debug, Error)]
pub enum HeartbeatError {
    /// `start` was called outside a Tokio runtime.
    #[error("no tokio runtime available to arm the heartbeat")]
    NoRuntime,
}

/// Background component that emits one liveness line per interval.
///
/// States: Stopped ⇄ Running, initial Stopped. `start` and `stop` are
/// both idempotent. Disarming goes through a watch channel, so once
/// `stop` returns no further lines are produced until a new `start`.
pub struct HeartbeatService {
    interval: Duration,
    message: String,
    sink: Arc<dyn HeartbeatSink>,
    armed: Mutex<Option<watch::Sender<bool>>>,
}

impl HeartbeatService {
    /// Create a heartbeat in the Stopped state.
    pub fn new(interval: Duration, message: impl Into<String>, sink: Arc<dyn HeartbeatSink>) -> Self {
        Self {
            interval,
            message: message.into(),
            sink,
            armed: Mutex::new(None),
        }
    }

    /// Arm the repeating ticker. Idempotent: a second `start` while
    /// Running is a no-op. The first line appears one full interval
    /// after arming.
    pub fn start(&self) -> Result<(), HeartbeatError> {
        let mut armed = self.lock_armed();
        if let Some(tx) = armed.as_ref() {
            if !tx.is_closed() {
                tracing::warn!("Heartbeat already running, ignoring start");
                return Ok(());
            }
            // The previous ticker task exited on its own (sink
            // failure); rearm below.
        }

        let handle =
            tokio::runtime::Handle::try_current().map_err(|_| HeartbeatError::NoRuntime)?;
        let (tx, mut rx) = watch::channel(false);

        let interval = self.interval;
        let message = self.message.clone();
        let sink = Arc::clone(&self.sink);

        tracing::info!(interval_ms = interval.as_millis() as u64, "Heartbeat armed");

        handle.spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick of a tokio interval completes at once;
            // consume it so firings start one interval after arming.
            ticker.tick().await;

            loop {
                tokio::select! {
                    biased;
                    changed = rx.changed() => {
                        if changed.is_err() || *rx.borrow() {
                            tracing::debug!("Heartbeat disarmed");
                            break;
                        }
                    }
                    _ = ticker.tick() => {
                        if *rx.borrow() {
                            break;
                        }
                        let now = chrono::Local::now();
                        let line =
                            format!("It is {} and {}", now.format("%Y-%m-%d %H:%M:%S"), message);
                        if let Err(e) = sink.emit(&line) {
                            // Explicit policy: an output failure stops
                            // the heartbeat, not the whole process.
                            tracing::error!(error = %e, "Heartbeat sink failed, disarming");
                            break;
                        }
                    }
                }
            }
        });

        *armed = Some(tx);
        Ok(())
    }

    /// Disarm the ticker. Idempotent: a no-op when Stopped.
    pub fn stop(&self) {
        if let Some(tx) = self.lock_armed().take() {
            let _ = tx.send(true);
            tracing::info!("Heartbeat stopped");
        }
    }

    /// Whether the ticker task is currently armed.
    pub fn is_running(&self) -> bool {
        self.lock_armed()
            .as_ref()
            .map(|tx| !tx.is_closed())
            .unwrap_or(false)
    }

    fn lock_armed(&self) -> std::sync::MutexGuard<'_, Option<watch::Sender<bool>>> {
        // A panic while holding the lock leaves no invalid state
        // behind; recover the guard instead of propagating poison.
        self.armed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for HeartbeatService {
    fn drop(&mut self) {
        self.stop();
    }
}
