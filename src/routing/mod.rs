//! Routing registration subsystem.
//!
//! # Data Flow
//! ```text
//! Direct binding:
//!     bind_handler(pattern, fn)
//!     → bind_item (lifecycle gate)
//!     → BindingMap[pattern] = HandlerItem::Function
//!
//! Controller binding:
//!     bind_object(template, controller)
//!     → pattern.rs (substitute {.struct}/{.method}, or append method)
//!     → transcode.rs (identifier → url segment, per name)
//!     → bind_item (lifecycle gate), once per method
//!
//! Dispatch layer (external):
//!     snapshot() → BindingMap, immutable entries
//! ```
//!
//! # Design Decisions
//! - Patterns are opaque keys; no matching happens here
//! - Registration is frozen while the server is running

pub mod handler;
pub mod pattern;
pub mod registry;
pub mod transcode;

pub use handler::{BindingMap, Controller, Handler, HandlerFunc, HandlerItem, HandlerKind};
pub use pattern::{compile_pattern, substitute_placeholders};
pub use registry::{BindError, BindingRegistry, DuplicatePolicy};
pub use transcode::transcode;
