// ueie-core/src/infrastructure/config/mod.rs

pub mod project;
pub mod storage;

pub use crate::domain::project::ProjectConfig;
pub use project::load_project_config;
pub use storage::StorageConfig;
