//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Build AppContext → publish "starting" → publish "started"
//!     → enter run loop → exit code
//!
//! Hooks (hooks.rs):
//!     Ordered list of callables, invoked synchronously per phase
//!
//! Shutdown (shutdown.rs):
//!     StopSignal: triggered once, observed by the run loop
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger StopSignal
//! ```
//!
//! # Design Decisions
//! - Ordered startup: "starting" completes fully before "started",
//!   which completes fully before the run loop is entered
//! - Hooks are an explicit registered list, not a pub/sub bus, so the
//!   ordering guarantee is verifiable by inspection
//! - Fail fast: a hook error aborts the bootstrap before the run loop

pub mod hooks;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use hooks::{LifecycleHooks, Phase};
pub use shutdown::StopSignal;
pub use startup::{run_service, AppContext, BootError};
