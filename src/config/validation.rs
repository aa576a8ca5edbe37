//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (status codes)
//! - Detect duplicate route patterns when duplicates are rejected
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RegistrarConfig → Result<(), Vec<ValidationError>>
//! - Pattern syntax is not checked; malformed patterns are the dispatch layer's concern

use std::collections::HashSet;
use thiserror::Error;

use crate::config::schema::RegistrarConfig;
use crate::routing::DuplicatePolicy;

/// A single semantic problem in a manifest.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("routes[{index}]: pattern must not be empty")]
    EmptyRoutePattern { index: usize },

    #[error("route {pattern}: invalid status code {status}")]
    InvalidStatus { pattern: String, status: u16 },

    #[error("controllers[{index}]: name must not be empty")]
    EmptyControllerName { index: usize },

    #[error("controller {name}: pattern must not be empty")]
    EmptyControllerPattern { name: String },

    #[error("controller {name}: no methods to bind")]
    NoMethods { name: String },

    #[error("controller {name}: method name must not be empty")]
    EmptyMethodName { name: String },

    #[error("route {pattern}: duplicate pattern")]
    DuplicateRoute { pattern: String },
}

/// Check a manifest, collecting every problem found.
pub fn validate_config(config: &RegistrarConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.pattern.is_empty() {
            errors.push(ValidationError::EmptyRoutePattern { index });
            continue;
        }
        if !(100..=999).contains(&route.status) {
            errors.push(ValidationError::InvalidStatus {
                pattern: route.pattern.clone(),
                status: route.status,
            });
        }
        if !seen.insert(route.pattern.as_str())
            && config.server.duplicate_policy == DuplicatePolicy::Reject
        {
            errors.push(ValidationError::DuplicateRoute {
                pattern: route.pattern.clone(),
            });
        }
    }

    for (index, controller) in config.controllers.iter().enumerate() {
        if controller.name.is_empty() {
            errors.push(ValidationError::EmptyControllerName { index });
            continue;
        }
        if controller.pattern.is_empty() {
            errors.push(ValidationError::EmptyControllerPattern {
                name: controller.name.clone(),
            });
        }
        if controller.methods.is_empty() {
            errors.push(ValidationError::NoMethods {
                name: controller.name.clone(),
            });
        } else if controller.methods.iter().any(|m| m.is_empty()) {
            errors.push(ValidationError::EmptyMethodName {
                name: controller.name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
