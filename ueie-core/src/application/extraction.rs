// ueie-core/src/application/extraction.rs

use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{info, instrument};

use crate::domain::error::DomainError;
use crate::domain::profile::{Column, DType, Dataset};
use crate::domain::project::InputFormat;
use crate::error::UeieError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::connector::{Connector, quote_ident};

/// View over the raw file, columns as found in the file.
pub const RAW_SOURCE: &str = "raw_source";
/// Raw rows with standardized column names.
pub const RAW_TABLE: &str = "raw_standardized";

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"[ \-]").unwrap()
});

/// `" Order Date "` -> `"order_date"`, `"unit-price"` -> `"unit_price"`.
pub fn standardize_column_name(name: &str) -> String {
    SEPARATORS
        .replace_all(&name.trim().to_lowercase(), "_")
        .into_owned()
}

/// Standardizes every name, suffixing collisions (`amount`, `amount_2`, ...).
pub fn standardize_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .map(|raw| {
            let base = standardize_column_name(raw);
            let mut candidate = base.clone();
            let mut i = 2;
            while !seen.insert(candidate.clone()) {
                candidate = format!("{}_{}", base, i);
                i += 1;
            }
            candidate
        })
        .collect()
}

/// Loads a raw file into the engine under standardized names and returns its snapshot.
#[instrument(skip(connector))]
pub async fn extract_dataset(connector: &dyn Connector, path: &Path) -> Result<Dataset, UeieError> {
    let format = InputFormat::from_path(path).ok_or_else(|| {
        InfrastructureError::UnsupportedFormat(path.to_string_lossy().to_string())
    })?;

    connector.register_source(RAW_SOURCE, path, format).await?;

    let source_columns = connector.fetch_columns(RAW_SOURCE).await?;
    if source_columns.is_empty() {
        return Err(DomainError::MalformedDataset(format!("{:?} has no columns", path)).into());
    }

    let names = standardize_names(source_columns.iter().map(|c| c.name.as_str()));
    let select = source_columns
        .iter()
        .zip(&names)
        .map(|(col, name)| format!("{} AS {}", quote_ident(&col.name), quote_ident(name)))
        .collect::<Vec<_>>()
        .join(", ");

    connector
        .execute(&format!(
            "CREATE OR REPLACE TABLE {} AS SELECT {} FROM {}",
            quote_ident(RAW_TABLE),
            select,
            quote_ident(RAW_SOURCE)
        ))
        .await?;

    let dataset_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| RAW_TABLE.to_string());

    let dataset = snapshot(connector, RAW_TABLE, &dataset_name).await?;
    info!(
        rows = dataset.row_count(),
        columns = dataset.columns().len(),
        "Loaded raw dataset"
    );
    Ok(dataset)
}

/// Reads a whole table into memory, every cell in text form.
pub async fn snapshot(
    connector: &dyn Connector,
    table: &str,
    dataset_name: &str,
) -> Result<Dataset, UeieError> {
    let schema = connector.fetch_columns(table).await?;

    let casts = schema
        .iter()
        .map(|c| format!("CAST({} AS VARCHAR)", quote_ident(&c.name)))
        .collect::<Vec<_>>()
        .join(", ");
    let rows = connector
        .fetch_text_rows(
            &format!("SELECT {} FROM {}", casts, quote_ident(table)),
            schema.len(),
        )
        .await?;

    // row-major -> column-major
    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::with_capacity(rows.len()); schema.len()];
    for row in rows {
        for (column_cells, cell) in cells.iter_mut().zip(row) {
            column_cells.push(cell);
        }
    }

    let columns = schema
        .into_iter()
        .zip(cells)
        .map(|(col, cells)| Column::new(col.name, DType::from_engine_type(&col.data_type), cells))
        .collect();

    Ok(Dataset::new(dataset_name, columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::duckdb::DuckDBConnector;
    use anyhow::Result;
    use std::fs;

    #[test]
    fn test_standardize_column_name() {
        assert_eq!(standardize_column_name(" Order Date "), "order_date");
        assert_eq!(standardize_column_name("Unit-Price"), "unit_price");
        assert_eq!(standardize_column_name("customer id"), "customer_id");
        assert_eq!(standardize_column_name("already_ok"), "already_ok");
    }

    #[test]
    fn test_colliding_names_get_suffixes() {
        let names = standardize_names(["Amount", "amount", "AMOUNT ", "other"]);
        assert_eq!(names, vec!["amount", "amount_2", "amount_3", "other"]);
    }

    #[tokio::test]
    async fn test_extract_csv() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sales.csv");
        fs::write(
            &path,
            "Order ID,Unit-Price,Customer Name\n1,2.5,ada\n2,,bob\n3,4.0,\n",
        )?;

        let connector = DuckDBConnector::in_memory()?;
        let dataset = extract_dataset(&connector, &path).await?;

        assert_eq!(dataset.name(), "sales.csv");
        assert_eq!(dataset.row_count(), 3);
        let names: Vec<&str> = dataset.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["order_id", "unit_price", "customer_name"]);

        let price = dataset
            .column("unit_price")
            .ok_or_else(|| anyhow::anyhow!("unit_price missing"))?;
        assert_eq!(price.dtype, DType::Float);
        assert_eq!(price.null_count(), 1);

        let customer = dataset
            .column("customer_name")
            .ok_or_else(|| anyhow::anyhow!("customer_name missing"))?;
        assert_eq!(customer.dtype, DType::String);
        assert_eq!(customer.cells[0].as_deref(), Some("ada"));
        Ok(())
    }

    #[tokio::test]
    async fn test_extract_rejects_unknown_extension() -> Result<()> {
        let connector = DuckDBConnector::in_memory()?;
        let res = extract_dataset(&connector, Path::new("raw/book.xlsx")).await;
        assert!(matches!(
            res,
            Err(UeieError::Infrastructure(InfrastructureError::UnsupportedFormat(_)))
        ));
        Ok(())
    }
}
