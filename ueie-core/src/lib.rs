// ueie-core/src/lib.rs

// 1. Documentation is not mandatory yet
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contract with the SQL engine used for extraction and load.
pub mod ports;

// 2. Domain (business core)
// Profiling, scoring, rules, gates and drift detection.
// Depends on NOTHING else (neither infra nor app).
pub mod domain;

// 3. Infrastructure (Adapters)
// DuckDB, config files, baseline store, metadata writer, raw file discovery.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration (Run pipeline, Extraction, Cleaning, Clean artifacts).
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::UeieError;
