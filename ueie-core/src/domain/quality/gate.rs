// ueie-core/src/domain/quality/gate.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::verdict::GateVerdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualityStatus {
    Pass,
    Warn,
    Fail,
}

impl QualityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warn => "WARN",
            Self::Fail => "FAIL",
        }
    }
}

impl fmt::Display for QualityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Thresholds a quality score into PASS / WARN / FAIL.
/// Each band includes its lower bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityGate {
    pub pass_threshold: f64,
    pub warn_threshold: f64,
}

impl Default for QualityGate {
    fn default() -> Self {
        Self {
            pass_threshold: 80.0,
            warn_threshold: 60.0,
        }
    }
}

impl QualityGate {
    pub fn new(pass_threshold: f64, warn_threshold: f64) -> Self {
        Self {
            pass_threshold,
            warn_threshold,
        }
    }

    /// `None` means the score could not be computed (no usable profile).
    pub fn evaluate(&self, score: Option<f64>) -> GateVerdict<QualityStatus> {
        let score = match score {
            Some(s) if !s.is_nan() => s,
            _ => {
                return GateVerdict::new(
                    QualityStatus::Fail,
                    "Quality score unavailable (insufficient data)",
                );
            }
        };

        if score >= self.pass_threshold {
            GateVerdict::new(
                QualityStatus::Pass,
                format!("Quality score {} >= {}", score, self.pass_threshold),
            )
        } else if score >= self.warn_threshold {
            GateVerdict::new(
                QualityStatus::Warn,
                format!(
                    "Quality score {} between {} and {}",
                    score, self.warn_threshold, self.pass_threshold
                ),
            )
        } else {
            GateVerdict::new(
                QualityStatus::Fail,
                format!("Quality score {} < {}", score, self.warn_threshold),
            )
        }
    }
}
