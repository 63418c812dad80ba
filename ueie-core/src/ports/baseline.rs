// ueie-core/src/ports/baseline.rs

use crate::domain::profile::DatasetProfile;
use crate::error::UeieError;

/// Storage for the drift baseline: the profile of the last completed run.
pub trait BaselineStore: Send + Sync {
    /// Last saved profile. An absent baseline (first run) is an empty profile, not an error.
    fn load(&self) -> Result<DatasetProfile, UeieError>;

    /// Replaces the baseline. Readers never observe a partially written profile.
    fn save(&self, profile: &DatasetProfile) -> Result<(), UeieError>;
}
