//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! service. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service identity presented to the host (name, display name,
    /// description).
    pub service: ServiceSection,

    /// Heartbeat component settings.
    pub heartbeat: HeartbeatSection,

    /// Observability settings.
    pub observability: ObservabilitySection,
}

/// Service identity configuration.
///
/// These three strings are consumed by the run loop at registration
/// time. They are configuration rather than compiled-in constants so
/// packaging can rebrand the service without a rebuild.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceSection {
    /// Internal service name (no whitespace).
    pub name: String,

    /// Human-friendly display name.
    pub display_name: String,

    /// Human-readable description.
    pub description: String,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            name: "vigild".to_string(),
            display_name: "Vigil Heartbeat Service".to_string(),
            description: "Emits a periodic liveness line while the host is running".to_string(),
        }
    }
}

/// Heartbeat component configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HeartbeatSection {
    /// Interval between heartbeat lines, in milliseconds.
    pub interval_ms: u64,

    /// Status fragment appended to each line after the timestamp.
    pub message: String,
}

impl Default for HeartbeatSection {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            message: "all is well".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilitySection {
    /// Tracing filter directive used when RUST_LOG is not set.
    pub log_filter: String,
}

impl Default for ObservabilitySection {
    fn default() -> Self {
        Self {
            log_filter: "vigil=info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_registration_constants() {
        let config = ServiceConfig::default();
        assert_eq!(config.service.name, "vigild");
        assert_eq!(config.service.display_name, "Vigil Heartbeat Service");
        assert_eq!(config.heartbeat.interval_ms, 1000);
        assert_eq!(config.heartbeat.message, "all is well");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [heartbeat]
            interval_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.heartbeat.interval_ms, 250);
        assert_eq!(config.heartbeat.message, "all is well");
        assert_eq!(config.service.name, "vigild");
    }
}
