// ueie-core/src/application/clean.rs

use std::fs;
use std::path::{Component, Path};
use tracing::info;

use crate::domain::project::ProjectConfig;
use crate::error::UeieError;
use crate::infrastructure::config::StorageConfig;

/// Removes the processed and log directories configured for the project.
///
/// Raw inputs are never touched. Returns the configured paths that were removed.
pub fn clean_artifacts(project_dir: &Path, config: &ProjectConfig) -> Result<Vec<String>, UeieError> {
    info!("🧹 Cleaning UEIE artifacts...");

    let project_dir = std::path::absolute(project_dir)?;
    let storage = StorageConfig::resolve(&project_dir, config);

    let targets = [
        (&config.paths.processed_dir, &storage.processed_dir),
        (&config.paths.log_dir, &storage.log_dir),
    ];
    let mut removed = Vec::new();

    for (configured, full_path) in targets {
        ensure_removable(&project_dir, &storage.raw_dir, full_path)?;

        if full_path.exists() {
            if full_path.is_dir() {
                fs::remove_dir_all(full_path)?;
            } else {
                fs::remove_file(full_path)?;
            }
            println!("   🗑️  Artifact removed: {}", configured);
            removed.push(configured.clone());
        }
    }

    Ok(removed)
}

/// A target must sit strictly below the project directory and must not hold the raw inputs.
fn ensure_removable(project_dir: &Path, raw_dir: &Path, target: &Path) -> Result<(), UeieError> {
    let below_project = target
        .strip_prefix(project_dir)
        .ok()
        .filter(|rel| !rel.as_os_str().is_empty())
        .is_some_and(|rel| rel.components().all(|c| matches!(c, Component::Normal(_))));

    if !below_project || raw_dir.starts_with(target) {
        return Err(UeieError::UnsafePath(target.display().to_string()));
    }
    Ok(())
}
