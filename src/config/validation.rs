//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (interval > 0)
//! - Check the service identity strings are usable for registration
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::ServiceConfig;

/// A single semantic violation found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The heartbeat interval must be at least one millisecond.
    #[error("heartbeat.interval_ms must be greater than zero")]
    ZeroInterval,

    /// The internal service name is required.
    #[error("service.name must not be empty")]
    EmptyServiceName,

    /// Internal service names are used as registration keys and must
    /// not contain whitespace.
    #[error("service.name '{0}' must not contain whitespace")]
    ServiceNameWhitespace(String),

    /// The display name is required.
    #[error("service.display_name must not be empty")]
    EmptyDisplayName,
}

/// Validate a parsed configuration, collecting every violation.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.heartbeat.interval_ms == 0 {
        errors.push(ValidationError::ZeroInterval);
    }

    let name = config.service.name.trim();
    if name.is_empty() {
        errors.push(ValidationError::EmptyServiceName);
    } else if name.chars().any(char::is_whitespace) {
        errors.push(ValidationError::ServiceNameWhitespace(name.to_string()));
    }

    if config.service.display_name.trim().is_empty() {
        errors.push(ValidationError::EmptyDisplayName);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
