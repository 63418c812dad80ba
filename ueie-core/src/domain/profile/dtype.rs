// ueie-core/src/domain/profile/dtype.rs

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Closed set of storage types a column can be profiled as.
///
/// Engine type names (DuckDB `BIGINT`, `VARCHAR`, ...) and legacy tags found in older
/// baselines (`int64`, `object`, ...) are both folded into this enum, so two profiles are
/// always compared on the same vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    Integer,
    Float,
    String,
    Datetime,
    Boolean,
    #[default]
    Other,
}

impl DType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Datetime => "datetime",
            Self::Boolean => "boolean",
            Self::Other => "other",
        }
    }

    /// Maps a SQL engine type name (as reported by `information_schema`) to a tag.
    pub fn from_engine_type(engine_type: &str) -> Self {
        let upper = engine_type.trim().to_uppercase();
        let base = upper.split('(').next().unwrap_or_default().trim();

        match base {
            "TINYINT" | "SMALLINT" | "INTEGER" | "INT" | "BIGINT" | "HUGEINT" | "UTINYINT"
            | "USMALLINT" | "UINTEGER" | "UBIGINT" | "UHUGEINT" => Self::Integer,
            "FLOAT" | "REAL" | "DOUBLE" | "DECIMAL" | "NUMERIC" => Self::Float,
            "VARCHAR" | "TEXT" | "STRING" | "CHAR" | "BPCHAR" | "UUID" => Self::String,
            "BOOLEAN" | "BOOL" => Self::Boolean,
            b if b.starts_with("TIMESTAMP") || b == "DATE" || b.starts_with("TIME") => {
                Self::Datetime
            }
            _ => Self::Other,
        }
    }

    /// Parses a persisted tag. Unknown tags become `Other` instead of failing the load.
    pub fn from_tag(tag: &str) -> Self {
        let lower = tag.trim().to_lowercase();
        match lower.as_str() {
            "integer" => Self::Integer,
            "float" => Self::Float,
            "string" => Self::String,
            "datetime" => Self::Datetime,
            "boolean" => Self::Boolean,
            // legacy dataframe tags
            "object" => Self::String,
            "bool" => Self::Boolean,
            l if l.starts_with("int") || l.starts_with("uint") => Self::Integer,
            l if l.starts_with("float") => Self::Float,
            l if l.starts_with("datetime") => Self::Datetime,
            _ => Self::Other,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Textual or mixed/object-like storage.
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::String | Self::Other)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for DType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}
