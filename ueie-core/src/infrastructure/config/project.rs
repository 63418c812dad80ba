// ueie-core/src/infrastructure/config/project.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::project::{OutputFormat, ProjectConfig};
use crate::infrastructure::error::InfrastructureError;

const CONFIG_CANDIDATES: [&str; 3] = ["ueie_project_conf.yaml", "ueie.yaml", "ueie.yml"];

// --- LOADER ---

/// Loads the project configuration. The file is optional: without one every setting takes
/// its default value. Environment overrides are applied last, then the result is validated.
#[instrument(skip(project_dir))]
pub fn load_project_config(project_dir: &Path) -> Result<ProjectConfig, InfrastructureError> {
    let mut config = match find_main_config(project_dir) {
        Some(config_path) => {
            info!(path = ?config_path, "Loading project configuration");
            let content = fs::read_to_string(&config_path)?;
            serde_yaml::from_str(&content)?
        }
        None => {
            info!(dir = ?project_dir, "No project configuration file, using defaults");
            ProjectConfig::default()
        }
    };

    // Layering: UEIE_PROCESSED_DIR=out/nightly ueie run
    apply_env_overrides(&mut config)?;

    config.validate()?;
    Ok(config)
}

fn find_main_config(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|filename| root.join(filename))
        .find(|p| p.exists())
}

fn apply_env_overrides(config: &mut ProjectConfig) -> Result<(), InfrastructureError> {
    if let Ok(val) = std::env::var("UEIE_RAW_DIR") {
        info!(old = ?config.paths.raw_dir, new = ?val, "Overriding raw dir via ENV");
        config.paths.raw_dir = val;
    }
    if let Ok(val) = std::env::var("UEIE_PROCESSED_DIR") {
        info!(old = ?config.paths.processed_dir, new = ?val, "Overriding processed dir via ENV");
        config.paths.processed_dir = val;
    }
    if let Ok(val) = std::env::var("UEIE_OUTPUT_FORMAT") {
        config.output.format =
            OutputFormat::from_str(&val).map_err(InfrastructureError::ConfigError)?;
        info!(format = %config.output.format, "Overriding output format via ENV");
    }
    Ok(())
}
