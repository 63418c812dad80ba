// ueie-core/src/domain/drift/detector.rs

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::drift::{DriftDetail, DriftEntry, DriftKind, DriftReport, Severity};
use crate::domain::profile::{ColumnProfile, DatasetProfile};

pub const MINOR_NULL_THRESHOLD: f64 = 5.0;
pub const MAJOR_NULL_THRESHOLD: f64 = 20.0;
pub const UNIQUE_THRESHOLD: f64 = 20.0;

/// Percentage-point deltas above which a column is considered drifting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_null_threshold_order"))]
pub struct DriftThresholds {
    #[serde(default = "default_minor_null")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub minor_null_threshold: f64,

    #[serde(default = "default_major_null")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub major_null_threshold: f64,

    #[serde(default = "default_unique")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub unique_threshold: f64,
}

fn default_minor_null() -> f64 {
    MINOR_NULL_THRESHOLD
}
fn default_major_null() -> f64 {
    MAJOR_NULL_THRESHOLD
}
fn default_unique() -> f64 {
    UNIQUE_THRESHOLD
}

fn validate_null_threshold_order(t: &DriftThresholds) -> Result<(), ValidationError> {
    if t.minor_null_threshold > t.major_null_threshold {
        return Err(ValidationError::new("minor_null_threshold_above_major"));
    }
    Ok(())
}

impl Default for DriftThresholds {
    fn default() -> Self {
        Self {
            minor_null_threshold: MINOR_NULL_THRESHOLD,
            major_null_threshold: MAJOR_NULL_THRESHOLD,
            unique_threshold: UNIQUE_THRESHOLD,
        }
    }
}

/// Column-by-column diff of two profiles of the same logical dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriftDetector {
    thresholds: DriftThresholds,
}

impl DriftDetector {
    pub fn new(thresholds: DriftThresholds) -> Self {
        Self { thresholds }
    }

    /// Compares `current` against `previous`. An empty `previous` (first run) reports every
    /// current column as new.
    pub fn detect(&self, previous: &DatasetProfile, current: &DatasetProfile) -> DriftReport {
        let mut report = DriftReport::new();

        for curr in current.iter() {
            let entry = match previous.get(&curr.name) {
                None => Some(DriftEntry {
                    column: curr.name.clone(),
                    severity: Severity::Major,
                    kind: DriftKind::NewColumn,
                    detail: DriftDetail::Message("Column not present in previous run".into()),
                }),
                Some(prev) => self.compare_column(prev, curr),
            };
            if let Some(entry) = entry {
                report.record(entry);
            }
        }

        for prev in previous.iter().filter(|p| !current.contains(&p.name)) {
            report.record(DriftEntry {
                column: prev.name.clone(),
                severity: Severity::Critical,
                kind: DriftKind::RemovedColumn,
                detail: DriftDetail::Message("Column missing in current run".into()),
            });
        }

        report
    }

    fn compare_column(&self, prev: &ColumnProfile, curr: &ColumnProfile) -> Option<DriftEntry> {
        // A type change supersedes any statistical drift on the column.
        if prev.dtype != curr.dtype {
            return Some(DriftEntry {
                column: curr.name.clone(),
                severity: Severity::Critical,
                kind: DriftKind::TypeChange,
                detail: DriftDetail::Message(format!(
                    "Dtype changed from {} to {}",
                    prev.dtype, curr.dtype
                )),
            });
        }

        let mut severity = Severity::Minor;
        let mut issues = Vec::new();

        let null_diff = (curr.null_pct - prev.null_pct).abs();
        if null_diff > self.thresholds.major_null_threshold {
            severity = severity.max(Severity::Major);
            issues.push(format!(
                "Null % changed from {} to {}",
                prev.null_pct, curr.null_pct
            ));
        } else if null_diff > self.thresholds.minor_null_threshold {
            issues.push(format!(
                "Null % changed from {} to {}",
                prev.null_pct, curr.null_pct
            ));
        }

        let unique_diff = (curr.unique_pct - prev.unique_pct).abs();
        if unique_diff > self.thresholds.unique_threshold {
            severity = severity.max(Severity::Major);
            issues.push(format!(
                "Uniqueness % changed from {} to {}",
                prev.unique_pct, curr.unique_pct
            ));
        }

        if issues.is_empty() {
            return None;
        }

        Some(DriftEntry {
            column: curr.name.clone(),
            severity,
            kind: DriftKind::Drift,
            detail: DriftDetail::Issues(issues),
        })
    }
}
