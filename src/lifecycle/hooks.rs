//! Ordered lifecycle hooks.
//!
//! # Responsibilities
//! - Hold an explicit, ordered list of lifecycle callables
//! - Publish a phase by invoking every hook synchronously, in
//!   registration order
//! - Surface the first hook failure with the hook's name and phase
//!
//! # Design Decisions
//! - No hidden fan-out: subscribers are registered in one place at
//!   startup, so ordering is verifiable by inspection
//! - A hook error stops the publication; later hooks do not run

use thiserror::Error;

use crate::lifecycle::startup::AppContext;

/// Bootstrap phase announced to lifecycle hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Published before the run loop; setup work belongs here.
    Starting,
    /// Published after all `Starting` hooks have completed.
    Started,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Starting => write!(f, "starting"),
            Phase::Started => write!(f, "started"),
        }
    }
}

/// Error returned by an individual lifecycle hook.
#[derive(Debug, Error)]
pub enum HookError {
    /// Hook-specific failure with a human-readable reason.
    #[error("{0}")]
    Failed(String),

    /// IO failure during hook execution.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A hook failure, annotated with the hook's name and the phase that
/// was being published.
#[derive(Debug, Error)]
#[error("lifecycle hook '{hook}' failed during '{phase}'")]
pub struct PublishError {
    pub hook: String,
    pub phase: Phase,
    #[source]
    pub source: HookError,
}

type HookFn = dyn Fn(Phase, &AppContext) -> Result<(), HookError> + Send + Sync;

/// Explicit, ordered registry of lifecycle hooks.
#[derive(Default)]
pub struct LifecycleHooks {
    hooks: Vec<(String, Box<HookFn>)>,
}

impl LifecycleHooks {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a named hook. Hooks run in registration order and
    /// receive every published phase.
    pub fn register<F>(&mut self, name: impl Into<String>, hook: F)
    where
        F: Fn(Phase, &AppContext) -> Result<(), HookError> + Send + Sync + 'static,
    {
        self.hooks.push((name.into(), Box::new(hook)));
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Publish a phase to every hook, in order.
    ///
    /// Returns after all hooks have completed, so a caller that
    /// publishes `Starting` and then `Started` gets the strict
    /// ordering guarantee for free. Stops at the first failure.
    pub fn publish(&self, phase: Phase, context: &AppContext) -> Result<(), PublishError> {
        tracing::debug!(%phase, hooks = self.hooks.len(), "Publishing lifecycle phase");
        for (name, hook) in &self.hooks {
            hook(phase, context).map_err(|source| PublishError {
                hook: name.clone(),
                phase,
                source,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;
    use std::sync::{Arc, Mutex};

    fn context() -> AppContext {
        AppContext::new(ServiceConfig::default())
    }

    #[test]
    fn hooks_run_in_registration_order() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let mut hooks = LifecycleHooks::new();
        for name in ["first", "second", "third"] {
            let seen = Arc::clone(&seen);
            hooks.register(name, move |phase, _ctx| {
                seen.lock().unwrap().push(format!("{}:{}", name, phase));
                Ok(())
            });
        }

        let ctx = context();
        hooks.publish(Phase::Starting, &ctx).unwrap();
        hooks.publish(Phase::Started, &ctx).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                "first:starting",
                "second:starting",
                "third:starting",
                "first:started",
                "second:started",
                "third:started",
            ]
        );
    }

    #[test]
    fn failing_hook_stops_publication() {
        let seen: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
        let mut hooks = LifecycleHooks::new();

        let s = Arc::clone(&seen);
        hooks.register("ok", move |_, _| {
            s.lock().unwrap().push("ok");
            Ok(())
        });
        hooks.register("broken", |_, _| {
            Err(HookError::Failed("config check failed".to_string()))
        });
        let s = Arc::clone(&seen);
        hooks.register("never", move |_, _| {
            s.lock().unwrap().push("never");
            Ok(())
        });

        let err = hooks.publish(Phase::Starting, &context()).unwrap_err();
        assert_eq!(err.hook, "broken");
        assert_eq!(err.phase, Phase::Starting);
        assert_eq!(*seen.lock().unwrap(), vec!["ok"]);
    }

    #[test]
    fn hooks_can_read_the_context() {
        let mut hooks = LifecycleHooks::new();
        hooks.register("check-interval", |_, ctx| {
            if ctx.config.heartbeat.interval_ms == 0 {
                return Err(HookError::Failed("zero interval".to_string()));
            }
            Ok(())
        });
        assert!(hooks.publish(Phase::Starting, &context()).is_ok());
    }

    #[test]
    fn empty_registry_publishes_cleanly() {
        let hooks = LifecycleHooks::new();
        assert!(hooks.is_empty());
        assert!(hooks.publish(Phase::Starting, &context()).is_ok());
        assert!(hooks.publish(Phase::Started, &context()).is_ok());
    }
}
