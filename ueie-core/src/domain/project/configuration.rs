// ueie-core/src/domain/project/configuration.rs

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::drift::DriftThresholds;
use crate::domain::project::OutputFormat;
use crate::domain::quality::{QualityGate, QualityScorer, RuleEngine};
use crate::domain::quality::rules::DROP_NULL_THRESHOLD;
use crate::domain::quality::scorer::NULL_PENALTY_WEIGHT;

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct ProjectConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    #[validate(nested)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    #[validate(nested)]
    pub quality: QualitySettings,

    #[serde(default)]
    #[validate(nested)]
    pub drift: DriftThresholds,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            paths: PathsConfig::default(),
            output: OutputConfig::default(),
            quality: QualitySettings::default(),
            drift: DriftThresholds::default(),
        }
    }
}

/// Locations, resolved against the project directory. Baseline and metadata files live
/// inside `processed_dir`.
#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct PathsConfig {
    #[serde(default = "default_raw_dir")]
    #[validate(length(min = 1))]
    pub raw_dir: String,

    #[serde(default = "default_processed_dir")]
    #[validate(length(min = 1))]
    pub processed_dir: String,

    #[serde(default = "default_log_dir")]
    #[validate(length(min = 1))]
    pub log_dir: String,

    #[serde(default = "default_baseline_file")]
    #[validate(length(min = 1))]
    pub baseline_file: String,

    #[serde(default = "default_metadata_file")]
    #[validate(length(min = 1))]
    pub metadata_file: String,

    #[serde(default = "default_output_name")]
    #[validate(length(min = 1))]
    pub output_name: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            raw_dir: default_raw_dir(),
            processed_dir: default_processed_dir(),
            log_dir: default_log_dir(),
            baseline_file: default_baseline_file(),
            metadata_file: default_metadata_file(),
            output_name: default_output_name(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
#[validate(schema(function = "validate_gate_order"))]
pub struct QualitySettings {
    #[serde(default = "default_pass_threshold")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub pass_threshold: f64,

    #[serde(default = "default_warn_threshold")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub warn_threshold: f64,

    #[serde(default = "default_null_penalty_weight")]
    #[validate(range(min = 0.0))]
    pub null_penalty_weight: f64,

    #[serde(default = "default_drop_null_threshold")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub drop_null_threshold: f64,

    /// Remove `drop_column` columns from the written output. Rules are advisory otherwise.
    #[serde(default)]
    pub apply_rules: bool,
}

impl Default for QualitySettings {
    fn default() -> Self {
        Self {
            pass_threshold: default_pass_threshold(),
            warn_threshold: default_warn_threshold(),
            null_penalty_weight: default_null_penalty_weight(),
            drop_null_threshold: default_drop_null_threshold(),
            apply_rules: false,
        }
    }
}

impl QualitySettings {
    pub fn gate(&self) -> QualityGate {
        QualityGate::new(self.pass_threshold, self.warn_threshold)
    }

    pub fn scorer(&self) -> QualityScorer {
        QualityScorer::new(self.null_penalty_weight)
    }

    pub fn rule_engine(&self) -> RuleEngine {
        RuleEngine::new(self.drop_null_threshold)
    }
}

fn validate_gate_order(q: &QualitySettings) -> Result<(), ValidationError> {
    if q.warn_threshold > q.pass_threshold {
        return Err(ValidationError::new("warn_threshold_above_pass_threshold"));
    }
    Ok(())
}

fn default_name() -> String {
    "ueie".to_string()
}
fn default_raw_dir() -> String {
    "raw".to_string()
}
fn default_processed_dir() -> String {
    "processed".to_string()
}
fn default_log_dir() -> String {
    "logs".to_string()
}
fn default_baseline_file() -> String {
    "last_profile.json".to_string()
}
fn default_metadata_file() -> String {
    "run_metadata.json".to_string()
}
fn default_output_name() -> String {
    "cleaned_data".to_string()
}
fn default_pass_threshold() -> f64 {
    80.0
}
fn default_warn_threshold() -> f64 {
    60.0
}
fn default_null_penalty_weight() -> f64 {
    NULL_PENALTY_WEIGHT
}
fn default_drop_null_threshold() -> f64 {
    DROP_NULL_THRESHOLD
}
