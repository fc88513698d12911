//! Stop coordination for the service.

use std::sync::Arc;

use tokio::sync::watch;

/// One-shot, clonable stop signal.
///
/// Backed by a watch channel, so a trigger happens-before any task
/// that observes it, and late subscribers see an already-triggered
/// signal immediately.
#[derive(Clone)]
pub struct StopSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl StopSignal {
    /// Create a new, untriggered stop signal.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Trigger the signal. Idempotent.
    pub fn trigger(&self) {
        let _ = self.tx.send(true);
    }

    /// Whether the signal has been triggered.
    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Wait until the signal is triggered.
    ///
    /// Resolves immediately if already triggered.
    pub async fn wait(&self) {
        let mut rx = self.tx.subscribe();
        loop {
            if *rx.borrow() {
                return;
            }
            if rx.changed().await.is_err() {
                return;
            }
        }
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn wait_resolves_after_trigger() {
        let stop = StopSignal::new();
        assert!(!stop.is_triggered());

        let waiter = stop.clone();
        let handle = tokio::spawn(async move { waiter.wait().await });

        stop.trigger();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("wait did not resolve")
            .unwrap();
        assert!(stop.is_triggered());
    }

    #[tokio::test]
    async fn wait_on_already_triggered_signal_returns_immediately() {
        let stop = StopSignal::new();
        stop.trigger();
        stop.trigger(); // idempotent
        tokio::time::timeout(Duration::from_millis(100), stop.wait())
            .await
            .expect("wait should not block");
    }
}
