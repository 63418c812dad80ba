// ueie-core/src/infrastructure/metadata.rs

use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::run::RunMetadata;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::write_json;

/// Writes the per-run audit record to a fixed location, replacing the previous one.
#[derive(Debug, Clone)]
pub struct MetadataWriter {
    path: PathBuf,
}

impl MetadataWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, metadata: &RunMetadata) -> Result<&Path, InfrastructureError> {
        write_json(&self.path, metadata)?;
        info!(path = ?self.path, "Run metadata written");
        Ok(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::drift::{DriftGate, DriftReport};
    use crate::domain::quality::{QualityGate, RemediationPlan};
    use crate::domain::run::{FileInfo, RowCounts};
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_write_metadata_record() -> Result<()> {
        let dir = tempdir()?;
        let writer = MetadataWriter::new(dir.path().join("processed/run_metadata.json"));

        let metadata = RunMetadata {
            run_time: "2026-01-01T00:00:00+00:00".into(),
            file_info: FileInfo {
                file_name: "sales.csv".into(),
                file_size_mb: 0.01,
                extension: ".csv".into(),
            },
            quality_score: None,
            quality_gate: QualityGate::default().evaluate(None),
            drift_gate: DriftGate::evaluate(&DriftReport::new()),
            drift_report: DriftReport::new(),
            rules: RemediationPlan::default(),
            rows: RowCounts::default(),
            output_path: "processed/cleaned_data.csv".into(),
            duration_secs: 0.5,
            continue_pipeline: false,
        };

        let path = writer.write(&metadata)?;
        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path)?)?;

        assert_eq!(json["file_info"]["file_name"], "sales.csv");
        assert!(json["quality_score"].is_null());
        assert_eq!(json["quality_gate"]["status"], "FAIL");
        assert_eq!(json["drift_gate"]["status"], "NO_DRIFT");
        assert_eq!(json["continue_pipeline"], false);
        Ok(())
    }
}
