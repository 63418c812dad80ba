// ueie-core/src/application/mod.rs

pub mod clean;
pub mod extraction;
pub mod pipeline;
pub mod transform;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do `use ueie_core::application::{run_pipeline, clean_artifacts};`
// without knowing the internal file layout.

pub use clean::clean_artifacts;
pub use extraction::extract_dataset;
pub use pipeline::{RunContext, run_pipeline};
pub use transform::clean_dataset;
