//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! registry / lifecycle
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (binding and transition counters)
//! ```
//!
//! # Design Decisions
//! - Structured fields (pattern, target, status) on every event
//! - Accepted bindings log at debug, rejections at warn

pub mod logging;
pub mod metrics;
