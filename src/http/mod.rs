//! HTTP server configuration phase.
//!
//! # Data Flow
//! ```text
//! RegistrarConfig / programmatic bindings
//!     → server.rs (Server: lifecycle + registry)
//!     → responder.rs (fixed-response handlers, manifest controllers)
//!     → start() → registry frozen → BindingMap to the dispatch layer
//! ```

pub mod responder;
pub mod server;

pub use responder::{ManifestController, StaticResponse};
pub use server::{serve_manifest, BindingEntry, ManifestError, Server};
