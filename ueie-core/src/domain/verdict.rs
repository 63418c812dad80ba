// ueie-core/src/domain/verdict.rs

use serde::{Deserialize, Serialize};

/// Outcome of a gate: a discrete status plus a human-readable reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateVerdict<S> {
    pub status: S,
    pub reason: String,
}

impl<S> GateVerdict<S> {
    pub fn new(status: S, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }
}
