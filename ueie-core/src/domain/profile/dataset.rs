// ueie-core/src/domain/profile/dataset.rs

use std::collections::HashSet;

use crate::domain::error::DomainError;
use crate::domain::profile::DType;

/// One column of an extracted snapshot. Cells are kept in their textual form,
/// `None` marks a missing value.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub dtype: DType,
    pub cells: Vec<Option<String>>,
}

impl Column {
    pub fn new(name: impl Into<String>, dtype: DType, cells: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            dtype,
            cells,
        }
    }

    pub fn null_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Number of distinct non-missing values.
    pub fn distinct_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .map(String::as_str)
            .collect::<HashSet<_>>()
            .len()
    }
}

/// In-memory snapshot of a tabular file: ordered columns of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    columns: Vec<Column>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Result<Self, DomainError> {
        let name = name.into();

        let mut seen = HashSet::new();
        for col in &columns {
            if !seen.insert(col.name.as_str()) {
                return Err(DomainError::MalformedDataset(format!(
                    "duplicate column '{}' in '{}'",
                    col.name, name
                )));
            }
        }

        if let Some(first) = columns.first() {
            let expected = first.cells.len();
            if let Some(bad) = columns.iter().find(|c| c.cells.len() != expected) {
                return Err(DomainError::MalformedDataset(format!(
                    "column '{}' has {} cells, expected {}",
                    bad.name,
                    bad.cells.len(),
                    expected
                )));
            }
        }

        Ok(Self { name, columns })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }
}
