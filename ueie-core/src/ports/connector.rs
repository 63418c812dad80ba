// ueie-core/src/ports/connector.rs

// What the pipeline needs from a SQL engine, without knowing which engine it is.

use async_trait::async_trait;
use std::path::Path;

use crate::domain::project::{InputFormat, OutputFormat};
use crate::error::UeieError;

// Engine-independent column description
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSchema {
    pub name: String,
    pub data_type: String,
}

#[async_trait]
pub trait Connector: Send + Sync {
    async fn execute(&self, query: &str) -> Result<(), UeieError>;

    /// Columns of a table or view, in declaration order.
    async fn fetch_columns(&self, table_name: &str) -> Result<Vec<ColumnSchema>, UeieError>;

    /// Exposes a raw file as a queryable view named `name`.
    async fn register_source(
        &self,
        name: &str,
        path: &Path,
        format: InputFormat,
    ) -> Result<(), UeieError>;

    /// Runs `query` and returns every cell as text, `None` for SQL NULL.
    async fn fetch_text_rows(
        &self,
        query: &str,
        width: usize,
    ) -> Result<Vec<Vec<Option<String>>>, UeieError>;

    async fn query_scalar(&self, query: &str) -> Result<u64, UeieError>;

    /// Writes the full content of `table_name` to `path`.
    async fn export(
        &self,
        table_name: &str,
        path: &Path,
        format: OutputFormat,
    ) -> Result<(), UeieError>;

    fn engine_name(&self) -> &str;
}

/// Double-quotes an identifier for SQL.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Single-quotes a string literal for SQL.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
