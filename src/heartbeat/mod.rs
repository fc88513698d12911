//! Heartbeat subsystem.
//!
//! # Data Flow
//! ```text
//! ServiceRunner start hook
//!     → HeartbeatService::start (arms ticker task)
//!     → one line per interval through a HeartbeatSink
//!     → StopSignal / stop hook disarms the ticker
//! ```
//!
//! # Design Decisions
//! - Start/stop are idempotent; the state machine is Stopped ⇄ Running
//! - The ticker observes a watch-channel flag, so `stop` happens-before
//!   the task exiting (no unsynchronized shared flag)
//! - The output sink is a trait so tests can capture lines

pub mod service;

pub use service::{HeartbeatError, HeartbeatService, HeartbeatSink, StdoutSink};
