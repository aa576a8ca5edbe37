//! Route registration for an HTTP server.
//!
//! Binds URL patterns (optionally qualified by `method:` and `@domain`) to
//! handlers before the server starts serving, and freezes the bindings once
//! it does.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::RegistrarConfig;
pub use http::Server;
pub use lifecycle::{Lifecycle, ServerStatus};
pub use routing::{BindError, BindingRegistry, HandlerItem};
