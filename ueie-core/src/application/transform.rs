// ueie-core/src/application/transform.rs

use tracing::{instrument, warn};

use crate::domain::profile::{DType, Dataset};
use crate::error::UeieError;
use crate::ports::connector::{Connector, quote_ident, quote_literal};

/// Table holding the cleaned rows before export.
pub const CLEAN_TABLE: &str = "cleaned";
/// Placeholder written into missing textual cells.
pub const UNKNOWN_PLACEHOLDER: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleaningStats {
    pub input_rows: u64,
    pub output_rows: u64,
}

impl CleaningStats {
    pub fn duplicates_removed(&self) -> u64 {
        self.input_rows.saturating_sub(self.output_rows)
    }
}

/// Textual columns whose name hints at a timestamp get parsed as one.
pub fn is_date_like(column_name: &str) -> bool {
    let name = column_name.to_lowercase();
    name.contains("date") || name.contains("time") || name.ends_with("_dt")
}

fn column_expression(name: &str, dtype: DType) -> String {
    let ident = quote_ident(name);
    match dtype {
        DType::String if is_date_like(name) => {
            format!("TRY_CAST({ident} AS TIMESTAMP) AS {ident}")
        }
        numeric if numeric.is_numeric() => format!("COALESCE({ident}, 0) AS {ident}"),
        DType::Datetime => ident,
        _ => format!(
            "COALESCE(CAST({ident} AS VARCHAR), {}) AS {ident}",
            quote_literal(UNKNOWN_PLACEHOLDER)
        ),
    }
}

/// Builds the statement that deduplicates `source`, fills nulls and materializes `target`.
///
/// Columns listed in `dropped` are left out of the projection. Returns `None`
/// when nothing would remain to select.
pub fn build_cleaning_sql(
    source: &str,
    target: &str,
    columns: &[(&str, DType)],
    dropped: &[String],
) -> Option<String> {
    let projection: Vec<String> = columns
        .iter()
        .filter(|(name, _)| !dropped.iter().any(|d| d == name))
        .map(|(name, dtype)| column_expression(name, *dtype))
        .collect();

    if projection.is_empty() {
        return None;
    }

    Some(format!(
        "CREATE OR REPLACE TABLE {} AS SELECT {} FROM (SELECT DISTINCT * FROM {}) AS deduplicated",
        quote_ident(target),
        projection.join(", "),
        quote_ident(source)
    ))
}

/// Deduplicates and fills the raw table into [`CLEAN_TABLE`].
#[instrument(skip(connector, dataset), fields(dataset = dataset.name()))]
pub async fn clean_dataset(
    connector: &dyn Connector,
    source: &str,
    dataset: &Dataset,
    dropped: &[String],
) -> Result<CleaningStats, UeieError> {
    let columns: Vec<(&str, DType)> = dataset
        .columns()
        .iter()
        .map(|c| (c.name.as_str(), c.dtype))
        .collect();

    let sql = match build_cleaning_sql(source, CLEAN_TABLE, &columns, dropped) {
        Some(sql) => sql,
        None => {
            warn!("Remediation would drop every column, keeping them all");
            build_cleaning_sql(source, CLEAN_TABLE, &columns, &[]).ok_or_else(|| {
                UeieError::Invariant(format!("{} has no columns to clean", dataset.name()))
            })?
        }
    };

    connector.execute(&sql).await?;

    let input_rows = count_rows(connector, source).await?;
    let output_rows = count_rows(connector, CLEAN_TABLE).await?;
    Ok(CleaningStats {
        input_rows,
        output_rows,
    })
}

async fn count_rows(connector: &dyn Connector, table: &str) -> Result<u64, UeieError> {
    connector
        .query_scalar(&format!("SELECT COUNT(*) FROM {}", quote_ident(table)))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::extraction::{RAW_TABLE, extract_dataset, snapshot};
    use crate::infrastructure::adapters::duckdb::DuckDBConnector;
    use anyhow::Result;
    use std::fs;

    #[test]
    fn test_date_like_names() {
        assert!(is_date_like("order_date"));
        assert!(is_date_like("CreatedTime"));
        assert!(is_date_like("ship_dt"));
        assert!(!is_date_like("amount"));
        assert!(!is_date_like("dt_code"));
    }

    #[test]
    fn test_cleaning_sql_expressions() -> Result<()> {
        let columns = [
            ("id", DType::Integer),
            ("price", DType::Float),
            ("order_date", DType::String),
            ("city", DType::String),
            ("seen_at", DType::Datetime),
            ("notes", DType::String),
        ];
        let sql = build_cleaning_sql("raw", "out", &columns, &["notes".to_string()])
            .ok_or_else(|| anyhow::anyhow!("expected sql"))?;

        assert!(sql.starts_with("CREATE OR REPLACE TABLE \"out\""));
        assert!(sql.contains("COALESCE(\"id\", 0) AS \"id\""));
        assert!(sql.contains("COALESCE(\"price\", 0) AS \"price\""));
        assert!(sql.contains("TRY_CAST(\"order_date\" AS TIMESTAMP)"));
        assert!(sql.contains("COALESCE(CAST(\"city\" AS VARCHAR), 'unknown') AS \"city\""));
        assert!(sql.contains(", \"seen_at\""));
        assert!(!sql.contains("notes"));
        assert!(sql.contains("SELECT DISTINCT * FROM \"raw\""));
        Ok(())
    }

    #[test]
    fn test_cleaning_sql_nothing_left() {
        let columns = [("only", DType::String)];
        assert!(build_cleaning_sql("raw", "out", &columns, &["only".to_string()]).is_none());
    }

    #[tokio::test]
    async fn test_clean_dataset_end_to_end() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("orders.csv");
        fs::write(
            &path,
            "id,amount,city\n1,10,paris\n1,10,paris\n2,,lyon\n3,5,\n",
        )?;

        let connector = DuckDBConnector::in_memory()?;
        let dataset = extract_dataset(&connector, &path).await?;
        let stats = clean_dataset(&connector, RAW_TABLE, &dataset, &[]).await?;

        assert_eq!(stats.input_rows, 4);
        assert_eq!(stats.output_rows, 3);
        assert_eq!(stats.duplicates_removed(), 1);

        let cleaned = snapshot(&connector, CLEAN_TABLE, "cleaned").await?;
        for column in cleaned.columns() {
            assert_eq!(column.null_count(), 0, "column {} has nulls", column.name);
        }
        let city = cleaned
            .column("city")
            .ok_or_else(|| anyhow::anyhow!("city missing"))?;
        assert!(city.cells.iter().any(|c| c.as_deref() == Some("unknown")));
        Ok(())
    }

    #[tokio::test]
    async fn test_clean_dataset_drops_columns() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sparse.csv");
        fs::write(&path, "id,comment\n1,\n2,\n3,ok\n")?;

        let connector = DuckDBConnector::in_memory()?;
        let dataset = extract_dataset(&connector, &path).await?;
        clean_dataset(&connector, RAW_TABLE, &dataset, &["comment".to_string()]).await?;

        let columns = connector.fetch_columns(CLEAN_TABLE).await?;
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].name, "id");
        Ok(())
    }
}
