//! Service run loop subsystem.
//!
//! # Data Flow
//! ```text
//! bootstrap
//!     → ServiceRunner::run
//!     → log registration (identity strings from config)
//!     → component factory → HeartbeatService
//!     → start hook
//!     → block on StopSignal
//!     → stop hook
//!     → result code (passed through as the process exit code)
//! ```
//!
//! # Design Decisions
//! - The runner owns start/stop ordering; callers only supply the
//!   factory and the stop signal
//! - Result codes are plain i32 values handed to the caller unmapped

pub mod runner;

pub use runner::ServiceRunner;
