//! Fixed-response handlers built from a route manifest.
//!
//! # Responsibilities
//! - Answer a direct route with a configured status and body
//! - Act as a controller whose methods echo their own target name
//!
//! # Design Decisions
//! - Bodies are built per call from shared bytes; handlers hold no request state

use axum::body::{Body, Bytes};
use axum::http::{header, Request, Response, StatusCode};

use crate::config::{ControllerConfig, RouteConfig};
use crate::routing::{Controller, Handler};

/// A handler that always returns the same status and body.
#[derive(Debug, Clone)]
pub struct StaticResponse {
    status: StatusCode,
    body: Bytes,
}

impl StaticResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Build from a validated route entry; an out-of-range status falls back to 200.
    pub fn from_config(route: &RouteConfig) -> Self {
        let status = StatusCode::from_u16(route.status).unwrap_or(StatusCode::OK);
        Self::new(status, route.body.clone())
    }
}

impl Handler for StaticResponse {
    fn call(&self, _req: Request<Body>) -> Response<Body> {
        text_response(self.status, self.body.clone())
    }
}

/// A controller declared in the manifest.
///
/// Each method responds with `<Controller>.<Method>`.
#[derive(Debug, Clone)]
pub struct ManifestController {
    name: String,
    methods: Vec<String>,
}

impl ManifestController {
    pub fn new(name: impl Into<String>, methods: Vec<String>) -> Self {
        Self {
            name: name.into(),
            methods,
        }
    }

    pub fn from_config(controller: &ControllerConfig) -> Self {
        Self::new(controller.name.clone(), controller.methods.clone())
    }
}

impl Controller for ManifestController {
    fn name(&self) -> &str {
        &self.name
    }

    fn methods(&self) -> Vec<String> {
        self.methods.clone()
    }

    fn dispatch(&self, method: &str, _req: Request<Body>) -> Response<Body> {
        if !self.methods.iter().any(|m| m == method) {
            return text_response(StatusCode::NOT_FOUND, Bytes::from_static(b"Unknown method"));
        }
        text_response(StatusCode::OK, Bytes::from(format!("{}.{}", self.name, method)))
    }
}

fn text_response(status: StatusCode, body: Bytes) -> Response<Body> {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_response() {
        let handler = StaticResponse::from_config(&RouteConfig {
            pattern: "/teapot".into(),
            status: 418,
            body: "short and stout".into(),
        });
        let resp = handler.call(Request::new(Body::empty()));
        assert_eq!(resp.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn test_controller_dispatch() {
        let controller = ManifestController::new("UserList", vec!["Index".into()]);
        assert_eq!(controller.name(), "UserList");
        assert_eq!(controller.methods(), vec!["Index".to_string()]);

        let ok = controller.dispatch("Index", Request::new(Body::empty()));
        assert_eq!(ok.status(), StatusCode::OK);

        let missing = controller.dispatch("Delete", Request::new(Body::empty()));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
