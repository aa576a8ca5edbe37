//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route manifest (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RegistrarConfig (validated, immutable)
//!     → Server::from_config binds every route before start
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal manifests
//! - Validation separates syntactic (serde) from semantic checks
//! - No hot reload: bindings are frozen once the server runs

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ControllerConfig, ObservabilityConfig, RegistrarConfig, RouteConfig, ServerConfig};
pub use validation::ValidationError;
