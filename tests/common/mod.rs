//! Shared utilities for integration tests.

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use route_binder::routing::{BindingRegistry, HandlerFunc};
use std::sync::Arc;

/// A handler that answers every request with `status`.
pub fn respond(status: StatusCode) -> HandlerFunc {
    Arc::new(move |_req: Request<Body>| {
        let mut response = Response::new(Body::empty());
        *response.status_mut() = status;
        response
    })
}

/// Invoke the handler bound to `pattern` and return its status.
#[allow(dead_code)]
pub fn status_of(registry: &BindingRegistry, pattern: &str) -> Option<StatusCode> {
    registry
        .get(pattern)
        .map(|item| item.invoke(Request::new(Body::empty())).status())
}
