// ueie-core/src/domain/drift/gate.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::drift::{DriftReport, Severity};
use crate::domain::verdict::GateVerdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriftStatus {
    NoDrift,
    Minor,
    Major,
    Critical,
    /// Drift could not be analyzed (no current profile, unreadable baseline).
    Unknown,
}

impl DriftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoDrift => "NO_DRIFT",
            Self::Minor => "MINOR",
            Self::Major => "MAJOR",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for DriftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of the drift stage. `Unavailable` is kept apart from an empty report so that
/// "could not analyze" never reads as "analyzed, found nothing".
#[derive(Debug, Clone, PartialEq)]
pub enum DriftAnalysis {
    Analyzed(DriftReport),
    Unavailable { reason: String },
}

impl DriftAnalysis {
    pub fn report(&self) -> Option<&DriftReport> {
        match self {
            Self::Analyzed(report) => Some(report),
            Self::Unavailable { .. } => None,
        }
    }
}

pub struct DriftGate;

impl DriftGate {
    /// Overall verdict: CRITICAL > MAJOR > MINOR > NO_DRIFT.
    pub fn evaluate(report: &DriftReport) -> GateVerdict<DriftStatus> {
        match report.max_severity() {
            None => GateVerdict::new(DriftStatus::NoDrift, "No drift detected"),
            Some(Severity::Critical) => GateVerdict::new(
                DriftStatus::Critical,
                "Critical drift detected (schema/type change)",
            ),
            Some(Severity::Major) => GateVerdict::new(DriftStatus::Major, "Major drift detected"),
            Some(Severity::Minor) => {
                GateVerdict::new(DriftStatus::Minor, "Only minor drift detected")
            }
        }
    }

    pub fn evaluate_analysis(analysis: &DriftAnalysis) -> GateVerdict<DriftStatus> {
        match analysis {
            DriftAnalysis::Analyzed(report) => Self::evaluate(report),
            DriftAnalysis::Unavailable { reason } => GateVerdict::new(
                DriftStatus::Unknown,
                format!("Drift not analyzed: {}", reason),
            ),
        }
    }
}
