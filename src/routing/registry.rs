//! Pattern → handler binding registry.
//!
//! # Responsibilities
//! - Store every route binding, keyed by its final pattern string
//! - Reject all mutation once the server is running
//! - Compile controller patterns before storing them
//! - Hand a read-only snapshot to the dispatch layer
//!
//! # Design Decisions
//! - Every write funnels through `bind_item`, the single lifecycle gate
//! - The lifecycle read guard is held across check and insert
//! - Batches fail fast with no rollback
//! - Duplicate patterns overwrite unless the policy says otherwise

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::lifecycle::{Lifecycle, ServerStatus};
use crate::observability::metrics::{self, BindOutcome};
use crate::routing::handler::{BindingMap, Controller, HandlerFunc, HandlerItem};
use crate::routing::pattern::{compile_pattern, substitute_placeholders};

/// Errors returned by registry mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The server is serving traffic; bindings are frozen.
    #[error("server handlers cannot be changed while running (pattern: {pattern})")]
    ServerAlreadyRunning { pattern: String },

    /// An empty string cannot be used as a route key.
    #[error("route pattern must not be empty")]
    EmptyPattern,

    /// The pattern is already bound and duplicates are rejected.
    #[error("duplicate route pattern: {pattern}")]
    DuplicatePattern { pattern: String },
}

/// What happens when a pattern is bound twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// The last registration wins.
    #[default]
    Overwrite,
    /// The first registration wins; later ones fail.
    Reject,
}

/// Owner of all pattern → handler associations.
#[derive(Debug)]
pub struct BindingRegistry {
    lifecycle: Lifecycle,
    bindings: DashMap<String, Arc<HandlerItem>>,
    policy: DuplicatePolicy,
}

impl BindingRegistry {
    /// Create an empty registry gated by `lifecycle`.
    pub fn new(lifecycle: Lifecycle) -> Self {
        Self::with_policy(lifecycle, DuplicatePolicy::default())
    }

    pub fn with_policy(lifecycle: Lifecycle, policy: DuplicatePolicy) -> Self {
        Self {
            lifecycle,
            bindings: DashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Bind a bare function to `pattern`.
    ///
    /// The handler is stored as-is and invoked verbatim for every request.
    pub fn bind_handler(&self, pattern: impl Into<String>, handler: HandlerFunc) -> Result<(), BindError> {
        self.bind_item(pattern, HandlerItem::function(handler))
    }

    /// Store `item` under `pattern`.
    ///
    /// This is the only path that mutates the map. Fails with
    /// `ServerAlreadyRunning` if the server is running.
    pub fn bind_item(&self, pattern: impl Into<String>, item: HandlerItem) -> Result<(), BindError> {
        let pattern = pattern.into();

        // Held until the entry is written.
        let status = self.lifecycle.read();
        if *status == ServerStatus::Running {
            tracing::warn!(pattern = %pattern, "Binding rejected: server is running");
            metrics::record_binding(BindOutcome::Rejected);
            return Err(BindError::ServerAlreadyRunning { pattern });
        }
        if pattern.is_empty() {
            metrics::record_binding(BindOutcome::Rejected);
            return Err(BindError::EmptyPattern);
        }

        let target = item.describe();
        match self.bindings.entry(pattern) {
            Entry::Occupied(mut entry) => {
                if self.policy == DuplicatePolicy::Reject {
                    tracing::warn!(pattern = %entry.key(), "Binding rejected: duplicate pattern");
                    metrics::record_binding(BindOutcome::Rejected);
                    return Err(BindError::DuplicatePattern {
                        pattern: entry.key().clone(),
                    });
                }
                tracing::debug!(pattern = %entry.key(), target = %target, "Binding replaced");
                entry.insert(Arc::new(item));
                metrics::record_binding(BindOutcome::Replaced);
            }
            Entry::Vacant(entry) => {
                tracing::debug!(pattern = %entry.key(), target = %target, "Binding added");
                entry.insert(Arc::new(item));
                metrics::record_binding(BindOutcome::Accepted);
            }
        }
        Ok(())
    }

    /// Bind every `(pattern, item)` in iteration order.
    ///
    /// Stops at the first error; entries already applied stay bound.
    pub fn bind_many<I, P>(&self, entries: I) -> Result<(), BindError>
    where
        I: IntoIterator<Item = (P, HandlerItem)>,
        P: Into<String>,
    {
        for (pattern, item) in entries {
            self.bind_item(pattern, item)?;
        }
        Ok(())
    }

    /// Bind every method of `controller`, one compiled route per method.
    ///
    /// `{.struct}`/`{.method}` in `pattern` are substituted; without a
    /// `{.method}` placeholder the method name is appended to the path.
    /// Fails while running even if the controller exposes no methods.
    pub fn bind_object(&self, pattern: &str, controller: Arc<dyn Controller>) -> Result<(), BindError> {
        if self.lifecycle.is_running() {
            tracing::warn!(pattern = %pattern, controller = %controller.name(), "Binding rejected: server is running");
            metrics::record_binding(BindOutcome::Rejected);
            return Err(BindError::ServerAlreadyRunning {
                pattern: pattern.to_string(),
            });
        }
        let methods = controller.methods();
        if methods.is_empty() {
            tracing::debug!(pattern = %pattern, controller = %controller.name(), "Controller exposes no methods");
        }
        for method in methods {
            let route = compile_pattern(pattern, controller.name(), &method);
            self.bind_item(route, HandlerItem::method(controller.clone(), method))?;
        }
        Ok(())
    }

    /// Bind one method of `controller` to `pattern`.
    ///
    /// Placeholders are substituted but nothing is appended.
    pub fn bind_object_method(
        &self,
        pattern: &str,
        controller: Arc<dyn Controller>,
        method: &str,
    ) -> Result<(), BindError> {
        let route = substitute_placeholders(pattern, controller.name(), method);
        self.bind_item(route, HandlerItem::method(controller, method))
    }

    /// Look up the item bound to an exact pattern.
    pub fn get(&self, pattern: &str) -> Option<Arc<HandlerItem>> {
        self.bindings.get(pattern).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.bindings.contains_key(pattern)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// All bound patterns, sorted.
    pub fn patterns(&self) -> Vec<String> {
        let mut patterns: Vec<String> = self.bindings.iter().map(|e| e.key().clone()).collect();
        patterns.sort();
        patterns
    }

    /// Copy of the current bindings for the dispatch layer.
    pub fn snapshot(&self) -> BindingMap {
        self.bindings
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect()
    }
}
