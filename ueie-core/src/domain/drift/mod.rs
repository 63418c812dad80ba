// ueie-core/src/domain/drift/mod.rs

pub mod detector;
pub mod gate;
pub mod report;
pub mod severity;

pub use detector::{DriftDetector, DriftThresholds};
pub use gate::{DriftAnalysis, DriftGate, DriftStatus};
pub use report::{DriftDetail, DriftEntry, DriftReport};
pub use severity::{DriftKind, Severity};
