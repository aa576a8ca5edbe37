//! Configuration schema definitions.
//!
//! This module defines the route manifest structure.
//! All types derive Serde traits for deserialization from TOML files.

use serde::{Deserialize, Serialize};

use crate::routing::DuplicatePolicy;

/// Root configuration: server settings plus the routes to bind.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RegistrarConfig {
    /// Server identity and registry policy.
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Direct routes answered with a fixed response.
    pub routes: Vec<RouteConfig>,

    /// Controllers whose methods are bound through pattern compilation.
    pub controllers: Vec<ControllerConfig>,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server name, used in log output.
    pub name: String,

    /// Behavior when the same pattern is bound twice.
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            duplicate_policy: DuplicatePolicy::Overwrite,
        }
    }
}

/// A directly bound route with a fixed response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route pattern (e.g., "get:/health@example.com").
    pub pattern: String,

    /// Response status code (default: 200).
    #[serde(default = "default_status")]
    pub status: u16,

    /// Response body.
    #[serde(default)]
    pub body: String,
}

fn default_status() -> u16 {
    200
}

/// A controller bound method by method.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControllerConfig {
    /// Controller name, substituted for `{.struct}`.
    pub name: String,

    /// Pattern template (e.g., "/api/{.struct}/{.method}").
    pub pattern: String,

    /// Method names; each gets its own route.
    pub methods: Vec<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_manifest() {
        let config: RegistrarConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.name, "default");
        assert_eq!(config.server.duplicate_policy, DuplicatePolicy::Overwrite);
        assert_eq!(config.observability.log_level, "info");
        assert!(config.routes.is_empty());
    }

    #[test]
    fn test_full_manifest() {
        let config: RegistrarConfig = toml::from_str(
            r#"
            [server]
            name = "api"
            duplicate_policy = "reject"

            [[routes]]
            pattern = "get:/health"
            body = "ok"

            [[controllers]]
            name = "UserList"
            pattern = "/api/{.struct}"
            methods = ["Index", "ShowAll"]
            "#,
        )
        .unwrap();

        assert_eq!(config.server.duplicate_policy, DuplicatePolicy::Reject);
        assert_eq!(config.routes[0].status, 200);
        assert_eq!(config.routes[0].body, "ok");
        assert_eq!(config.controllers[0].methods.len(), 2);
    }
}
