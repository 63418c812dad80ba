// ueie-core/src/infrastructure/fs.rs

use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write content to a file atomically using a temporary file.
///
/// The content goes to a temporary file created next to the target, which is then
/// renamed over it. Readers see either the old file or the complete new one.
/// Missing parent directories are created.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    // Same directory as the target so the rename never crosses filesystems
    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_ref())?;
    temp_file.as_file().sync_all()?;

    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

/// Serializes `data` as pretty JSON and writes it atomically.
pub fn write_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), InfrastructureError> {
    let content = serde_json::to_string_pretty(data)?;
    atomic_write(path, content)
}
