//! Server lifecycle state cell.
//!
//! # States
//! - Stopped: configuring; route registration allowed
//! - Running: serving traffic; route registration rejected
//!
//! # State Transitions
//! ```text
//! Stopped → Running: start()
//! Running → Stopped: stop()
//! ```
//!
//! # Design Decisions
//! - The cell is owned by the server and injected into the registry (no globals)
//! - Transitions take the write lock; registrations hold the read lock across
//!   check and insert, so no binding can slip in while the server starts

use parking_lot::{RwLock, RwLockReadGuard};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::observability::metrics;

/// Server lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerStatus {
    #[default]
    Stopped,
    Running,
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerStatus::Stopped => f.write_str("stopped"),
            ServerStatus::Running => f.write_str("running"),
        }
    }
}

/// Errors from lifecycle transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("server is already running")]
    AlreadyRunning,

    #[error("server is not running")]
    NotRunning,
}

/// Shared, synchronized lifecycle status.
///
/// Cloning yields a handle to the same cell.
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    status: Arc<RwLock<ServerStatus>>,
}

impl Lifecycle {
    /// Create a new cell in the `Stopped` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status.
    pub fn status(&self) -> ServerStatus {
        *self.status.read()
    }

    pub fn is_running(&self) -> bool {
        self.status() == ServerStatus::Running
    }

    /// Transition Stopped → Running.
    pub fn start(&self) -> Result<(), LifecycleError> {
        self.transition(ServerStatus::Stopped, ServerStatus::Running)
            .map_err(|_| LifecycleError::AlreadyRunning)
    }

    /// Transition Running → Stopped.
    pub fn stop(&self) -> Result<(), LifecycleError> {
        self.transition(ServerStatus::Running, ServerStatus::Stopped)
            .map_err(|_| LifecycleError::NotRunning)
    }

    /// Hold the status for the duration of a registry mutation.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, ServerStatus> {
        self.status.read()
    }

    fn transition(&self, from: ServerStatus, to: ServerStatus) -> Result<(), ServerStatus> {
        let mut status = self.status.write();
        if *status != from {
            return Err(*status);
        }
        *status = to;
        drop(status);

        tracing::info!(from = %from, to = %to, "Server lifecycle transition");
        metrics::record_transition(to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.status(), ServerStatus::Stopped);

        lifecycle.start().unwrap();
        assert!(lifecycle.is_running());
        assert_eq!(lifecycle.start(), Err(LifecycleError::AlreadyRunning));

        lifecycle.stop().unwrap();
        assert_eq!(lifecycle.status(), ServerStatus::Stopped);
        assert_eq!(lifecycle.stop(), Err(LifecycleError::NotRunning));
    }

    #[test]
    fn test_clones_share_state() {
        let lifecycle = Lifecycle::new();
        let observer = lifecycle.clone();
        lifecycle.start().unwrap();
        assert!(observer.is_running());

        let independent = Lifecycle::new();
        assert!(!independent.is_running());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(LifecycleError::AlreadyRunning.to_string(), "server is already running");
        assert_eq!(ServerStatus::Running.to_string(), "running");
    }
}
