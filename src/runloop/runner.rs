//! Run loop adapter bridging the bootstrap to the host lifecycle.

use crate::config::ServiceSection;
use crate::heartbeat::HeartbeatService;
use crate::lifecycle::shutdown::StopSignal;

/// Result code for a clean run.
const CODE_OK: i32 = 0;
/// Result code when the component's start hook fails.
const CODE_START_FAILED: i32 = 1;

/// Drives the heartbeat component through its start/stop hooks.
///
/// The runner plays the role a service manager plays elsewhere: it
/// registers the service identity, constructs the component, starts
/// it, blocks until a stop is requested, and stops it.
pub struct ServiceRunner<F> {
    identity: ServiceSection,
    factory: F,
}

impl<F> ServiceRunner<F>
where
    F: Fn() -> HeartbeatService,
{
    /// Create a runner from the service identity and a zero-argument
    /// component factory.
    pub fn new(identity: ServiceSection, factory: F) -> Self {
        Self { identity, factory }
    }

    /// Run until the stop signal fires. Returns the result code the
    /// bootstrap passes through as the process exit code.
    pub async fn run(self, stop: StopSignal) -> i32 {
        tracing::info!(
            service = %self.identity.name,
            display_name = %self.identity.display_name,
            description = %self.identity.description,
            "Registering service with host"
        );

        let component = (self.factory)();
        if let Err(e) = component.start() {
            tracing::error!(error = %e, "Failed to start heartbeat component");
            return CODE_START_FAILED;
        }
        tracing::info!(service = %self.identity.name, "Service running");

        stop.wait().await;

        tracing::info!(service = %self.identity.name, "Stop requested, halting heartbeat");
        component.stop();
        tracing::info!(service = %self.identity.name, "Run loop exited");

        CODE_OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heartbeat::{HeartbeatSink, StdoutSink};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    struct CountingSink {
        count: AtomicUsize,
    }

    impl HeartbeatSink for CountingSink {
        fn emit(&self, _line: &str) -> std::io::Result<()> {
            self.count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn identity() -> ServiceSection {
        ServiceSection::default()
    }

    #[tokio::test]
    async fn pre_triggered_stop_exits_with_zero() {
        let runner = ServiceRunner::new(identity(), || {
            HeartbeatService::new(Duration::from_secs(1), "all is well", Arc::new(StdoutSink))
        });
        let stop = StopSignal::new();
        stop.trigger();
        assert_eq!(runner.run(stop).await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn run_starts_component_then_stops_it_on_signal() {
        let sink = Arc::new(CountingSink {
            count: AtomicUsize::new(0),
        });
        let sink_for_factory = Arc::clone(&sink);
        let runner = ServiceRunner::new(identity(), move || {
            HeartbeatService::new(
                Duration::from_millis(100),
                "all is well",
                sink_for_factory.clone(),
            )
        });

        let stop = StopSignal::new();
        let run = tokio::spawn(runner.run(stop.clone()));

        // Let the runner arm the heartbeat, then let a few ticks fire.
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        tokio::time::advance(Duration::from_millis(350)).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert_eq!(sink.count.load(Ordering::SeqCst), 3);

        stop.trigger();
        let code = run.await.unwrap();
        assert_eq!(code, 0);

        // No further emissions after the run loop stopped the component.
        tokio::time::advance(Duration::from_secs(2)).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert_eq!(sink.count.load(Ordering::SeqCst), 3);
    }
}
