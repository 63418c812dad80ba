// ueie-core/src/domain/run.rs

use serde::{Deserialize, Serialize};

use crate::domain::drift::{DriftReport, DriftStatus};
use crate::domain::quality::{QualityStatus, RemediationPlan};
use crate::domain::verdict::GateVerdict;

/// Descriptive data about the ingested file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub file_name: String,
    pub file_size_mb: f64,
    pub extension: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RowCounts {
    pub raw: u64,
    pub cleaned: u64,
    pub duplicates_removed: u64,
}

/// Audit record written once per run.
#[derive(Debug, Clone, Serialize)]
pub struct RunMetadata {
    pub run_time: String,
    pub file_info: FileInfo,
    pub quality_score: Option<f64>,
    pub quality_gate: GateVerdict<QualityStatus>,
    pub drift_gate: GateVerdict<DriftStatus>,
    pub drift_report: DriftReport,
    pub rules: RemediationPlan,
    pub rows: RowCounts,
    pub output_path: String,
    pub duration_secs: f64,
    pub continue_pipeline: bool,
}

/// Downstream consumption stops on a failed quality gate or on critical drift.
pub fn should_continue(
    quality: &GateVerdict<QualityStatus>,
    drift: &GateVerdict<DriftStatus>,
) -> bool {
    quality.status != QualityStatus::Fail && drift.status != DriftStatus::Critical
}
