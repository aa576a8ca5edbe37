//! Server facade owning the lifecycle and the binding registry.
//!
//! # Responsibilities
//! - Own one lifecycle cell and inject it into the registry
//! - Expose the binding surface (direct, object, batch)
//! - Drive Stopped ↔ Running transitions
//! - Apply a route manifest before start
//!
//! # Design Decisions
//! - No listener here: `start` only freezes the registry and logs the table
//! - Bindings are handed to the dispatch layer as an immutable snapshot

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::config::RegistrarConfig;
use crate::http::responder::{ManifestController, StaticResponse};
use crate::lifecycle::{Lifecycle, LifecycleError, ServerStatus};
use crate::routing::{
    BindError, BindingMap, BindingRegistry, Controller, DuplicatePolicy, HandlerFunc, HandlerItem,
};

/// Errors raised while binding a parsed manifest and starting the server.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error(transparent)]
    Bind(#[from] BindError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

/// One row of the binding table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BindingEntry {
    pub pattern: String,
    pub controller: Option<String>,
    pub method: String,
    pub target: String,
}

/// An HTTP server in its configuration phase.
pub struct Server {
    name: String,
    lifecycle: Lifecycle,
    registry: Arc<BindingRegistry>,
}

impl Server {
    /// Create a stopped server with the default duplicate policy.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_policy(name, DuplicatePolicy::default())
    }

    pub fn with_policy(name: impl Into<String>, policy: DuplicatePolicy) -> Self {
        let lifecycle = Lifecycle::new();
        let registry = Arc::new(BindingRegistry::with_policy(lifecycle.clone(), policy));
        Self {
            name: name.into(),
            lifecycle,
            registry,
        }
    }

    /// Build a server and bind every route and controller in `config`.
    pub fn from_config(config: &RegistrarConfig) -> Result<Self, BindError> {
        let server = Self::with_policy(config.server.name.clone(), config.server.duplicate_policy);

        server.registry.bind_many(config.routes.iter().map(|route| {
            let handler: HandlerFunc = Arc::new(StaticResponse::from_config(route));
            (route.pattern.clone(), HandlerItem::function(handler))
        }))?;

        for controller in &config.controllers {
            server.bind_object(&controller.pattern, Arc::new(ManifestController::from_config(controller)))?;
        }

        tracing::info!(
            server = %server.name,
            bindings = server.registry.len(),
            "Manifest applied"
        );
        Ok(server)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> ServerStatus {
        self.lifecycle.status()
    }

    /// Handle to the lifecycle cell.
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Shared handle to the registry.
    pub fn registry(&self) -> Arc<BindingRegistry> {
        self.registry.clone()
    }

    pub fn bind_handler(&self, pattern: impl Into<String>, handler: HandlerFunc) -> Result<(), BindError> {
        self.registry.bind_handler(pattern, handler)
    }

    pub fn bind_object(&self, pattern: &str, controller: Arc<dyn Controller>) -> Result<(), BindError> {
        self.registry.bind_object(pattern, controller)
    }

    pub fn bind_object_method(
        &self,
        pattern: &str,
        controller: Arc<dyn Controller>,
        method: &str,
    ) -> Result<(), BindError> {
        self.registry.bind_object_method(pattern, controller, method)
    }

    pub fn bind_many<I, P>(&self, entries: I) -> Result<(), BindError>
    where
        I: IntoIterator<Item = (P, HandlerItem)>,
        P: Into<String>,
    {
        self.registry.bind_many(entries)
    }

    /// Freeze the registry and begin serving.
    pub fn start(&self) -> Result<(), LifecycleError> {
        self.lifecycle.start()?;
        for entry in self.binding_table() {
            tracing::info!(pattern = %entry.pattern, target = %entry.target, "Route bound");
        }
        tracing::info!(server = %self.name, bindings = self.registry.len(), "Server running");
        Ok(())
    }

    pub fn stop(&self) -> Result<(), LifecycleError> {
        self.lifecycle.stop()?;
        tracing::info!(server = %self.name, "Server stopped");
        Ok(())
    }

    /// Snapshot of the bindings for the dispatch layer.
    pub fn bindings(&self) -> BindingMap {
        self.registry.snapshot()
    }

    /// Bindings as sorted, printable rows.
    pub fn binding_table(&self) -> Vec<BindingEntry> {
        let mut rows: Vec<BindingEntry> = self
            .registry
            .snapshot()
            .into_iter()
            .map(|(pattern, item)| BindingEntry {
                pattern,
                controller: item.controller().map(|c| c.name().to_string()),
                method: item.function_name().to_string(),
                target: item.describe(),
            })
            .collect();
        rows.sort_by(|a, b| a.pattern.cmp(&b.pattern));
        rows
    }
}

/// Bind a parsed manifest into a new server and start it.
pub fn serve_manifest(config: &RegistrarConfig) -> Result<Server, ManifestError> {
    let server = Server::from_config(config)?;
    server.start()?;
    Ok(server)
}
