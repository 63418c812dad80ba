// ueie-core/src/domain/mod.rs

pub mod drift;
pub mod error;
pub mod profile;
pub mod project;
pub mod quality;
pub mod run;
pub mod verdict;

// Handy re-exports to keep imports short elsewhere
pub use error::DomainError;
pub use verdict::GateVerdict;
