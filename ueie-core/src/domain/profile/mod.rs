// ueie-core/src/domain/profile/mod.rs

pub mod dataset;
pub mod dtype;
pub mod profiler;

pub use dataset::{Column, Dataset};
pub use dtype::DType;
pub use profiler::Profiler;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Rounds a percentage to two decimals.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Per-column statistics computed by the [`Profiler`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: DType,
    /// Missing cells, in percent of rows.
    pub null_pct: f64,
    /// Distinct non-missing values, in percent of rows.
    pub unique_pct: f64,
}

// Body of one entry in the persisted map; the column name is the key.
#[derive(Serialize, Deserialize)]
struct ColumnStats {
    dtype: DType,
    null_pct: f64,
    unique_pct: f64,
}

/// Column profiles keyed by name, in the dataset's column order.
///
/// Persisted as a JSON object `{"<column>": {"dtype", "null_pct", "unique_pct"}}`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DatasetProfile {
    columns: Vec<ColumnProfile>,
}

impl DatasetProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a column profile, replacing an existing one in place.
    pub fn insert(&mut self, profile: ColumnProfile) {
        match self.columns.iter_mut().find(|c| c.name == profile.name) {
            Some(existing) => *existing = profile,
            None => self.columns.push(profile),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnProfile> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<ColumnProfile> for DatasetProfile {
    fn from_iter<I: IntoIterator<Item = ColumnProfile>>(iter: I) -> Self {
        let mut profile = Self::new();
        for col in iter {
            profile.insert(col);
        }
        profile
    }
}

impl Serialize for DatasetProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for col in &self.columns {
            map.serialize_entry(
                &col.name,
                &ColumnStats {
                    dtype: col.dtype,
                    null_pct: col.null_pct,
                    unique_pct: col.unique_pct,
                },
            )?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DatasetProfile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ProfileVisitor;

        impl<'de> Visitor<'de> for ProfileVisitor {
            type Value = DatasetProfile;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of column name to column statistics")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut profile = DatasetProfile::new();
                while let Some((name, stats)) = access.next_entry::<String, ColumnStats>()? {
                    profile.insert(ColumnProfile {
                        name,
                        dtype: stats.dtype,
                        null_pct: stats.null_pct,
                        unique_pct: stats.unique_pct,
                    });
                }
                Ok(profile)
            }
        }

        deserializer.deserialize_map(ProfileVisitor)
    }
}
