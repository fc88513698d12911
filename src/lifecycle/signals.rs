//! OS signal handling.
//!
//! # Responsibilities
//! - Register signal handlers (SIGTERM, SIGINT; Ctrl-C elsewhere)
//! - Translate the first delivered signal into a StopSignal trigger
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - The stop path is the only cancellation mechanism; there is no
//!   forced-kill escalation because disarming a timer is prompt

use crate::lifecycle::shutdown::StopSignal;

/// Spawn a background task that triggers `stop` when the OS delivers
/// a termination signal.
pub fn forward_os_signals(stop: StopSignal) {
    tokio::spawn(async move {
        wait_for_termination().await;
        tracing::info!("Termination signal received, requesting stop");
        stop.trigger();
    });
}

#[cfg(unix)]
async fn wait_for_termination() {
    use tokio::signal::unix::{signal, SignalKind};

    let sigterm = signal(SignalKind::terminate());
    let sigint = signal(SignalKind::interrupt());

    match (sigterm, sigint) {
        (Ok(mut term), Ok(mut int)) => {
            tokio::select! {
                _ = term.recv() => tracing::debug!("SIGTERM received"),
                _ = int.recv() => tracing::debug!("SIGINT received"),
            }
        }
        (term, int) => {
            if let Err(e) = &term {
                tracing::error!(error = %e, "Failed to register SIGTERM handler");
            }
            if let Err(e) = &int {
                tracing::error!(error = %e, "Failed to register SIGINT handler");
            }
            // Degraded path: Ctrl-C still works without unix handlers.
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_termination() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
