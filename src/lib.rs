//! vigil — a minimal heartbeat background service.
//!
//! # Architecture Overview
//!
//! ```text
//! main (vigild)
//!     → config     load + validate ServiceConfig (TOML)
//!     → lifecycle  AppContext (composition root)
//!                  ordered lifecycle hooks: "starting" then "started"
//!                  StopSignal wired to SIGTERM/SIGINT
//!     → runloop    ServiceRunner: construct heartbeat, start hook,
//!                  block on StopSignal, stop hook, result code
//!     → heartbeat  one line per interval to stdout:
//!                  "It is <local timestamp> and all is well"
//! ```
//!
//! The bootstrap is fail-fast: any error during config load or hook
//! publication is logged (with its immediate cause, when present) and
//! the process exits non-zero. The run loop's result code becomes the
//! process exit code with no remapping.

pub mod config;
pub mod heartbeat;
pub mod lifecycle;
pub mod runloop;

pub use config::ServiceConfig;
pub use heartbeat::HeartbeatService;
pub use lifecycle::shutdown::StopSignal;
pub use runloop::ServiceRunner;
