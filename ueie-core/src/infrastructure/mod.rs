// ueie-core/src/infrastructure/mod.rs

pub mod adapters;
pub mod config;
pub mod discovery;
pub mod error;
pub mod fs;
pub mod metadata;
pub mod store;
