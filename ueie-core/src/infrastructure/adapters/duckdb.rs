// ueie-core/src/infrastructure/adapters/duckdb.rs

use async_trait::async_trait;
use duckdb::{Config, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

// Hexagonal imports
use crate::domain::project::{InputFormat, OutputFormat};
use crate::error::UeieError;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use crate::ports::connector::{ColumnSchema, Connector, quote_ident, quote_literal};

pub struct DuckDBConnector {
    conn: Arc<Mutex<Connection>>,
}

impl DuckDBConnector {
    pub fn new(db_path: &str) -> Result<Self, InfrastructureError> {
        let config = Config::default();

        let conn = if db_path == ":memory:" {
            Connection::open_in_memory_with_flags(config)?
        } else {
            Connection::open_with_flags(db_path, config)?
        };

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn in_memory() -> Result<Self, InfrastructureError> {
        Self::new(":memory:")
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, UeieError> {
        self.conn.lock().map_err(|_| {
            UeieError::Infrastructure(InfrastructureError::Io(std::io::Error::other(
                "DuckDB Mutex Poisoned",
            )))
        })
    }
}

fn db_err(e: duckdb::Error) -> UeieError {
    UeieError::Infrastructure(InfrastructureError::Database(DatabaseError::DuckDB(e)))
}

fn path_literal(path: &Path) -> Result<String, UeieError> {
    let path_str = path
        .to_str()
        .ok_or_else(|| UeieError::Invariant(format!("Non UTF-8 path: {:?}", path)))?;
    Ok(quote_literal(path_str))
}

#[async_trait]
impl Connector for DuckDBConnector {
    async fn execute(&self, query: &str) -> Result<(), UeieError> {
        debug!(query, "Executing statement");
        let conn = self.lock()?;
        conn.execute_batch(query).map_err(db_err)
    }

    async fn fetch_columns(&self, table_name: &str) -> Result<Vec<ColumnSchema>, UeieError> {
        let conn = self.lock()?;

        // DESCRIBE works the same on tables and on file-backed views
        let mut stmt = conn
            .prepare(&format!("DESCRIBE SELECT * FROM {}", quote_ident(table_name)))
            .map_err(db_err)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(ColumnSchema {
                    name: row.get(0)?,
                    data_type: row.get(1)?,
                })
            })
            .map_err(db_err)?;

        let mut columns = Vec::new();
        for row in rows {
            columns.push(row.map_err(db_err)?);
        }

        Ok(columns)
    }

    async fn register_source(
        &self,
        name: &str,
        path: &Path,
        format: InputFormat,
    ) -> Result<(), UeieError> {
        let path = path_literal(path)?;
        let reader = match format {
            InputFormat::Csv => format!("read_csv_auto({})", path),
            InputFormat::Parquet => format!("read_parquet({})", path),
            InputFormat::Json => {
                format!("read_json_auto({}, format = 'newline_delimited')", path)
            }
        };
        let query = format!(
            "CREATE OR REPLACE VIEW {} AS SELECT * FROM {}",
            quote_ident(name),
            reader
        );
        self.execute(&query).await
    }

    async fn fetch_text_rows(
        &self,
        query: &str,
        width: usize,
    ) -> Result<Vec<Vec<Option<String>>>, UeieError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(query).map_err(db_err)?;
        let mut rows = stmt.query([]).map_err(db_err)?;

        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(db_err)? {
            let mut cells = Vec::with_capacity(width);
            for i in 0..width {
                cells.push(row.get::<_, Option<String>>(i).map_err(db_err)?);
            }
            out.push(cells);
        }
        Ok(out)
    }

    async fn query_scalar(&self, query: &str) -> Result<u64, UeieError> {
        let conn = self.lock()?;
        let value: i64 = conn.query_row(query, [], |row| row.get(0)).map_err(db_err)?;
        u64::try_from(value).map_err(|_| {
            UeieError::Invariant(format!("Negative scalar returned by '{}'", query))
        })
    }

    async fn export(
        &self,
        table_name: &str,
        path: &Path,
        format: OutputFormat,
    ) -> Result<(), UeieError> {
        let options = match format {
            OutputFormat::Csv => "FORMAT CSV, HEADER",
            OutputFormat::Parquet => "FORMAT PARQUET",
        };
        let query = format!(
            "COPY (SELECT * FROM {}) TO {} ({})",
            quote_ident(table_name),
            path_literal(path)?,
            options
        );
        self.execute(&query).await
    }

    fn engine_name(&self) -> &str {
        "duckdb"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[tokio::test]
    async fn test_duckdb_flow() -> Result<()> {
        let connector = DuckDBConnector::in_memory()?;

        connector
            .execute("CREATE TABLE users (id INTEGER, name VARCHAR)")
            .await?;
        connector
            .execute("INSERT INTO users VALUES (1, 'ada'), (2, NULL)")
            .await?;

        let columns = connector.fetch_columns("users").await?;
        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name"]);
        assert_eq!(columns[0].data_type, "INTEGER");
        assert_eq!(columns[1].data_type, "VARCHAR");

        let rows = connector
            .fetch_text_rows(
                "SELECT CAST(id AS VARCHAR), CAST(name AS VARCHAR) FROM users ORDER BY id",
                2,
            )
            .await?;
        assert_eq!(
            rows,
            vec![
                vec![Some("1".to_string()), Some("ada".to_string())],
                vec![Some("2".to_string()), None],
            ]
        );

        assert_eq!(connector.query_scalar("SELECT count(*) FROM users").await?, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_register_and_export_csv() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let input = tmp.path().join("in.csv");
        std::fs::write(&input, "a,b\n1,x\n2,y\n")?;

        let connector = DuckDBConnector::in_memory()?;
        connector
            .register_source("src", &input, InputFormat::Csv)
            .await?;
        assert_eq!(connector.query_scalar("SELECT count(*) FROM src").await?, 2);

        let output = tmp.path().join("out.csv");
        connector
            .execute("CREATE TABLE copy_of_src AS SELECT * FROM src")
            .await?;
        connector
            .export("copy_of_src", &output, OutputFormat::Csv)
            .await?;

        let written = std::fs::read_to_string(&output)?;
        assert!(written.starts_with("a,b"));
        assert_eq!(written.lines().count(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_duckdb_error() -> Result<()> {
        let connector = DuckDBConnector::in_memory()?;
        let result = connector.execute("SELECT * FROM non_existent_table").await;
        assert!(result.is_err());
        assert_eq!(connector.engine_name(), "duckdb");
        Ok(())
    }
}
