// ueie-core/src/infrastructure/store/profile_store.rs

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::domain::profile::DatasetProfile;
use crate::error::UeieError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::write_json;
use crate::ports::baseline::BaselineStore;

/// Drift baseline kept as a single JSON document, replaced on every save.
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BaselineStore for JsonProfileStore {
    fn load(&self) -> Result<DatasetProfile, UeieError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = ?self.path, "No baseline profile yet (first run)");
                return Ok(DatasetProfile::new());
            }
            Err(e) => return Err(e.into()),
        };

        let profile = serde_json::from_str(&content).map_err(|source| {
            InfrastructureError::CorruptBaseline {
                path: self.path.clone(),
                source,
            }
        })?;
        Ok(profile)
    }

    fn save(&self, profile: &DatasetProfile) -> Result<(), UeieError> {
        write_json(&self.path, profile)?;
        debug!(path = ?self.path, columns = profile.len(), "Baseline profile saved");
        Ok(())
    }
}
