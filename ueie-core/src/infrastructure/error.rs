// ueie-core/src/infrastructure/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::project::InputFormat;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("DuckDB Engine Error: {0}")]
    #[diagnostic(
        code(ueie::infra::database::duckdb),
        help("An error occurred inside the SQL engine.")
    )]
    DuckDB(#[from] duckdb::Error),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DATABASE (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(ueie::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- SERIALIZATION ---
    #[error("JSON Error: {0}")]
    #[diagnostic(code(ueie::infra::json))]
    Json(#[from] serde_json::Error),

    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(ueie::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    // --- CONFIGURATION ---
    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration values: {0}")]
    #[diagnostic(
        code(ueie::infra::config_validation),
        help("Thresholds are percentages in [0, 100]; warn <= pass and minor <= major.")
    )]
    Validation(#[from] validator::ValidationErrors),

    // --- INPUT FILES ---
    #[error(
        "No input file found in '{}' (allowed extensions: {})",
        .0.display(),
        InputFormat::EXTENSIONS.join(", ")
    )]
    #[diagnostic(
        code(ueie::infra::no_input),
        help("Drop one file into the raw directory or pass --input.")
    )]
    NoInputFile(PathBuf),

    #[error("Unsupported file type: {0}")]
    #[diagnostic(code(ueie::infra::unsupported_format))]
    UnsupportedFormat(String),

    // --- BASELINE ---
    #[error("Baseline profile at '{}' is unreadable: {source}", .path.display())]
    #[diagnostic(
        code(ueie::infra::corrupt_baseline),
        help("Delete the baseline file to restart drift tracking from the next run.")
    )]
    CorruptBaseline {
        path: PathBuf,
        source: serde_json::Error,
    },
}

// Manual implementation for shortcuts (e.g. `?` operator on duckdb calls)
impl From<duckdb::Error> for InfrastructureError {
    fn from(err: duckdb::Error) -> Self {
        InfrastructureError::Database(DatabaseError::DuckDB(err))
    }
}
