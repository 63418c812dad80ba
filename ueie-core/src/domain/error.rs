// ueie-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Cannot profile dataset '{0}': it has no rows")]
    #[diagnostic(
        code(ueie::domain::degenerate_input),
        help("Percentages are undefined on an empty dataset. Check the extracted file.")
    )]
    DegenerateInput(String),

    #[error("Malformed dataset: {0}")]
    #[diagnostic(code(ueie::domain::malformed_dataset))]
    MalformedDataset(String),
}
