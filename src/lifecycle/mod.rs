//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Configuring (Stopped):
//!     routes bound → registry checks Lifecycle (read lock) → insert
//!
//! start():
//!     Lifecycle write lock → Running → registry frozen
//!
//! stop():
//!     Lifecycle write lock → Stopped → registry writable again
//! ```
//!
//! # Design Decisions
//! - One cell per server; tests build independent cells
//! - Check-then-act on the cell is a single critical section

pub mod state;

pub use state::{Lifecycle, LifecycleError, ServerStatus};
