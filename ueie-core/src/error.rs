// ueie-core/src/error.rs

use miette::Diagnostic;
use thiserror::Error;

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;

/// Error returned by every use case. Layer errors pass through untouched, so the
/// CLI renders their own codes and help.
#[derive(Error, Debug, Diagnostic)]
pub enum UeieError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),

    /// A condition the pipeline relies on did not hold (engine returned nonsense, empty projection...).
    #[error("Pipeline invariant violated: {0}")]
    #[diagnostic(code(ueie::invariant))]
    Invariant(String),

    #[error("Refusing to remove '{0}': it is outside the project or contains the raw inputs")]
    #[diagnostic(
        code(ueie::unsafe_path),
        help("processed_dir and log_dir must resolve below the project directory, apart from raw_dir.")
    )]
    UnsafePath(String),
}

/// Low-level failures that surface straight through `?` are infrastructure problems.
macro_rules! infrastructure_source {
    ($($source:ty),+ $(,)?) => {
        $(
            impl From<$source> for UeieError {
                fn from(err: $source) -> Self {
                    Self::Infrastructure(InfrastructureError::from(err))
                }
            }
        )+
    };
}

infrastructure_source!(std::io::Error, duckdb::Error, serde_json::Error);
