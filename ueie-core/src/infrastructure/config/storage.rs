// ueie-core/src/infrastructure/config/storage.rs

use std::path::{Path, PathBuf};

use crate::domain::project::{OutputFormat, ProjectConfig};

/// Resolved on-disk locations for one project. Passed explicitly to the stores and
/// writers so nothing depends on the process working directory.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    pub raw_dir: PathBuf,
    pub processed_dir: PathBuf,
    pub log_dir: PathBuf,
    pub baseline_path: PathBuf,
    pub metadata_path: PathBuf,
    /// Base name of the cleaned dataset; the format extension is appended, never substituted.
    pub output_name: String,
    pub output_format: OutputFormat,
}

impl StorageConfig {
    pub fn resolve(project_dir: &Path, config: &ProjectConfig) -> Self {
        let paths = &config.paths;
        let processed_dir = project_dir.join(&paths.processed_dir);

        Self {
            raw_dir: project_dir.join(&paths.raw_dir),
            log_dir: project_dir.join(&paths.log_dir),
            baseline_path: processed_dir.join(&paths.baseline_file),
            metadata_path: processed_dir.join(&paths.metadata_file),
            output_name: paths.output_name.clone(),
            output_format: config.output.format,
            processed_dir,
        }
    }

    /// Cleaned dataset path, e.g. `processed/cleaned_data.csv`.
    pub fn output_file(&self) -> PathBuf {
        self.processed_dir
            .join(format!("{}.{}", self.output_name, self.output_format.extension()))
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("pipeline.log")
    }
}
