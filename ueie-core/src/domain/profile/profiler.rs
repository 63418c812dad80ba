// ueie-core/src/domain/profile/profiler.rs

use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::profile::{ColumnProfile, Dataset, DatasetProfile, round2};

pub struct Profiler;

impl Profiler {
    /// Computes null and uniqueness percentages for every column of the snapshot.
    ///
    /// A snapshot without rows cannot be profiled (every percentage would divide by zero)
    /// and yields [`DomainError::DegenerateInput`].
    pub fn profile(dataset: &Dataset) -> Result<DatasetProfile, DomainError> {
        let rows = dataset.row_count();
        if rows == 0 {
            return Err(DomainError::DegenerateInput(dataset.name().to_string()));
        }
        let rows = rows as f64;

        let profile: DatasetProfile = dataset
            .columns()
            .iter()
            .map(|col| ColumnProfile {
                name: col.name.clone(),
                dtype: col.dtype,
                null_pct: round2(col.null_count() as f64 / rows * 100.0),
                unique_pct: round2(col.distinct_count() as f64 / rows * 100.0),
            })
            .collect();

        debug!(
            dataset = dataset.name(),
            columns = profile.len(),
            "Profile computed"
        );
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{Column, DType};

    fn cells(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn test_profile_percentages() -> anyhow::Result<()> {
        let dataset = Dataset::new(
            "orders",
            vec![
                Column::new(
                    "order_id",
                    DType::Integer,
                    cells(&[Some("1"), Some("2"), Some("3")]),
                ),
                Column::new(
                    "region",
                    DType::String,
                    cells(&[Some("EU"), None, Some("EU")]),
                ),
            ],
        )?;

        let profile = Profiler::profile(&dataset)?;

        let id = profile
            .get("order_id")
            .ok_or_else(|| anyhow::anyhow!("order_id missing"))?;
        assert_eq!(id.dtype, DType::Integer);
        assert_eq!(id.null_pct, 0.0);
        assert_eq!(id.unique_pct, 100.0);

        let region = profile
            .get("region")
            .ok_or_else(|| anyhow::anyhow!("region missing"))?;
        assert_eq!(region.null_pct, 33.33);
        assert_eq!(region.unique_pct, 33.33);
        Ok(())
    }

    #[test]
    fn test_profile_keeps_dataset_order() -> anyhow::Result<()> {
        let dataset = Dataset::new(
            "t",
            vec![
                Column::new("z", DType::Integer, cells(&[Some("1")])),
                Column::new("a", DType::Integer, cells(&[Some("1")])),
            ],
        )?;
        let profile = Profiler::profile(&dataset)?;
        let names: Vec<&str> = profile.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
        Ok(())
    }

    #[test]
    fn test_empty_dataset_is_degenerate() -> anyhow::Result<()> {
        let dataset = Dataset::new("empty", vec![Column::new("a", DType::Integer, vec![])])?;
        let res = Profiler::profile(&dataset);
        assert!(matches!(res, Err(DomainError::DegenerateInput(name)) if name == "empty"));
        Ok(())
    }
}
