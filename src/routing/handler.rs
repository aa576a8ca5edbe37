//! Handler abstractions stored in the binding registry.
//!
//! # Responsibilities
//! - Define the callable shape of a request handler
//! - Define controllers: named groups of methods bound through pattern compilation
//! - Represent one registrable unit (`HandlerItem`) and the exported `BindingMap`
//!
//! # Design Decisions
//! - A `HandlerItem` is either a direct function or a controller method, never both
//! - Items are immutable once built and shared via `Arc`
//! - Direct handlers are invoked verbatim; no per-call construction

use axum::body::Body;
use axum::http::{Request, Response};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Something invocable with a request.
pub trait Handler: Send + Sync {
    /// Handle the request and produce a response.
    fn call(&self, req: Request<Body>) -> Response<Body>;
}

impl<F> Handler for F
where
    F: Fn(Request<Body>) -> Response<Body> + Send + Sync,
{
    fn call(&self, req: Request<Body>) -> Response<Body> {
        self(req)
    }
}

/// Shared handler value stored in a direct binding.
pub type HandlerFunc = Arc<dyn Handler>;

/// A named group of methods, bound by compiling one route per method.
pub trait Controller: Send + Sync {
    /// Type name used for the `{.struct}` placeholder.
    fn name(&self) -> &str;

    /// Method names exposed for binding.
    fn methods(&self) -> Vec<String>;

    /// Invoke `method` for the request.
    fn dispatch(&self, method: &str, req: Request<Body>) -> Response<Body>;
}

/// The binding style of a `HandlerItem`.
#[derive(Clone)]
pub enum HandlerKind {
    /// A bare function bound directly.
    Function(HandlerFunc),
    /// A method on a controller.
    Method {
        controller: Arc<dyn Controller>,
        method: String,
    },
}

/// One registrable unit of request-handling logic.
#[derive(Clone)]
pub struct HandlerItem {
    kind: HandlerKind,
}

impl HandlerItem {
    /// Item for a direct function binding.
    pub fn function(handler: HandlerFunc) -> Self {
        Self {
            kind: HandlerKind::Function(handler),
        }
    }

    /// Item for a controller method binding.
    pub fn method(controller: Arc<dyn Controller>, method: impl Into<String>) -> Self {
        Self {
            kind: HandlerKind::Method {
                controller,
                method: method.into(),
            },
        }
    }

    pub fn kind(&self) -> &HandlerKind {
        &self.kind
    }

    /// The controller this item belongs to, absent for direct functions.
    pub fn controller(&self) -> Option<&Arc<dyn Controller>> {
        match &self.kind {
            HandlerKind::Function(_) => None,
            HandlerKind::Method { controller, .. } => Some(controller),
        }
    }

    /// Bound method name; empty for direct functions.
    pub fn function_name(&self) -> &str {
        match &self.kind {
            HandlerKind::Function(_) => "",
            HandlerKind::Method { method, .. } => method,
        }
    }

    /// The directly bound handler, absent for controller methods.
    pub fn handler(&self) -> Option<&HandlerFunc> {
        match &self.kind {
            HandlerKind::Function(handler) => Some(handler),
            HandlerKind::Method { .. } => None,
        }
    }

    /// Invoke the item with a request.
    pub fn invoke(&self, req: Request<Body>) -> Response<Body> {
        match &self.kind {
            HandlerKind::Function(handler) => handler.call(req),
            HandlerKind::Method { controller, method } => controller.dispatch(method, req),
        }
    }

    /// Human-readable target, e.g. `UserList.Show` or `<function>`.
    pub fn describe(&self) -> String {
        match &self.kind {
            HandlerKind::Function(_) => "<function>".to_string(),
            HandlerKind::Method { controller, method } => format!("{}.{}", controller.name(), method),
        }
    }
}

impl fmt::Debug for HandlerItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerItem")
            .field("controller", &self.controller().map(|c| c.name().to_string()))
            .field("function_name", &self.function_name())
            .field("direct", &self.handler().is_some())
            .finish()
    }
}

/// Finalized pattern → handler associations handed to the dispatch layer.
pub type BindingMap = HashMap<String, Arc<HandlerItem>>;
