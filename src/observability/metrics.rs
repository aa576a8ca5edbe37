//! Metrics collection.
//!
//! # Metrics
//! - `route_bindings_total` (counter): binding attempts by outcome
//!   (`accepted`, `replaced`, `rejected`)
//! - `server_transitions_total` (counter): lifecycle transitions by target status
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; without an installed recorder
//!   every call is a no-op, so library users opt in

use crate::lifecycle::ServerStatus;

/// Outcome of a single binding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    Accepted,
    Replaced,
    Rejected,
}

impl BindOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            BindOutcome::Accepted => "accepted",
            BindOutcome::Replaced => "replaced",
            BindOutcome::Rejected => "rejected",
        }
    }
}

/// Record one binding attempt.
pub fn record_binding(outcome: BindOutcome) {
    metrics::counter!("route_bindings_total", "outcome" => outcome.as_str()).increment(1);
}

/// Record a lifecycle transition.
pub fn record_transition(to: ServerStatus) {
    let status = match to {
        ServerStatus::Stopped => "stopped",
        ServerStatus::Running => "running",
    };
    metrics::counter!("server_transitions_total", "status" => status).increment(1);
}
