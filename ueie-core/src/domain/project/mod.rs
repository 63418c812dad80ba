// ueie-core/src/domain/project/mod.rs

pub mod configuration;
pub mod format;

pub use configuration::{OutputConfig, PathsConfig, ProjectConfig, QualitySettings};
pub use format::{InputFormat, OutputFormat};
