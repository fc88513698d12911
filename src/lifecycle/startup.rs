//! Startup orchestration.
//!
//! # Responsibilities
//! - Hold the composition root product (AppContext)
//! - Publish the "starting" and "started" phases, in order
//! - Hand control to the run loop and pass its result code through
//!
//! # Design Decisions
//! - Fail fast: any bootstrap error is fatal, never retried
//! - The context is passed by argument; nothing resolves ambiently
//! - "starting" completes fully before "started"; "started" completes
//!   fully before the run loop is entered

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::config::{ConfigError, ServiceConfig};
use crate::heartbeat::{HeartbeatService, StdoutSink};
use crate::lifecycle::hooks::{LifecycleHooks, Phase, PublishError};
use crate::lifecycle::shutdown::StopSignal;
use crate::runloop::ServiceRunner;

/// Everything the bootstrap wires together, passed explicitly to any
/// component that needs it.
pub struct AppContext {
    /// Validated, immutable service configuration.
    pub config: Arc<ServiceConfig>,
}

impl AppContext {
    /// Build the composition root from a validated configuration.
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Fatal bootstrap errors.
#[derive(Debug, Error)]
pub enum BootError {
    /// Configuration could not be loaded or validated.
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// A lifecycle hook failed while a phase was being published.
    #[error("lifecycle publication failed")]
    Lifecycle(#[from] PublishError),
}

/// Run the bootstrap sequence to completion.
///
/// Publishes `Starting` to every hook, then `Started`, then enters
/// the run loop. The run loop's result code is returned unmapped; the
/// caller turns it into the process exit code.
pub async fn run_service(
    context: &AppContext,
    hooks: &LifecycleHooks,
    stop: StopSignal,
) -> Result<i32, BootError> {
    hooks.publish(Phase::Starting, context)?;
    hooks.publish(Phase::Started, context)?;

    let config = Arc::clone(&context.config);
    let runner = ServiceRunner::new(context.config.service.clone(), move || {
        HeartbeatService::new(
            Duration::from_millis(config.heartbeat.interval_ms),
            config.heartbeat.message.clone(),
            Arc::new(StdoutSink),
        )
    });

    Ok(runner.run(stop).await)
}
