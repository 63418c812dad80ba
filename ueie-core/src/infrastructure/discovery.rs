// ueie-core/src/infrastructure/discovery.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::domain::profile::round2;
use crate::domain::project::InputFormat;
use crate::domain::run::FileInfo;
use crate::infrastructure::error::InfrastructureError;

/// Most recently modified supported file directly inside `raw_dir`.
pub fn latest_raw_file(raw_dir: &Path) -> Result<PathBuf, InfrastructureError> {
    fs::create_dir_all(raw_dir)?;

    let mut candidates: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in WalkDir::new(raw_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || InputFormat::from_path(path).is_none() {
            debug!(path = ?path, "Skipping unsupported entry");
            continue;
        }
        let meta = entry.metadata().map_err(std::io::Error::from)?;
        candidates.push((meta.modified()?, path.to_path_buf()));
    }

    // newest first, name as tie-breaker for determinism
    candidates.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

    let (_, latest) = candidates
        .into_iter()
        .next()
        .ok_or_else(|| InfrastructureError::NoInputFile(raw_dir.to_path_buf()))?;
    info!(path = ?latest, "Selected input file");
    Ok(latest)
}

pub fn file_info(path: &Path) -> Result<FileInfo, InfrastructureError> {
    let size = fs::metadata(path)?.len();
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default();

    Ok(FileInfo {
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
        file_size_mb: round2(size as f64 / (1024.0 * 1024.0)),
        extension,
    })
}
