//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → shared via Arc through the AppContext
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults so an absent config file still runs
//! - Validation separates syntactic (serde) from semantic checks
//! - The three service identity strings (name, display name,
//!   description) live here rather than in code, so packaging can
//!   rebrand the service without a rebuild

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError, DEFAULT_CONFIG_PATH};
pub use schema::{HeartbeatSection, ObservabilitySection, ServiceConfig, ServiceSection};
pub use validation::{validate_config, ValidationError};
