// ueie-core/src/domain/drift/severity.rs

use serde::{Deserialize, Serialize};
use std::fmt;

// Declaration order gives Minor < Major < Critical, so escalation is a plain `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Minor,
    Major,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "MINOR",
            Self::Major => "MAJOR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriftKind {
    NewColumn,
    RemovedColumn,
    TypeChange,
    Drift,
}

impl DriftKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewColumn => "NEW_COLUMN",
            Self::RemovedColumn => "REMOVED_COLUMN",
            Self::TypeChange => "TYPE_CHANGE",
            Self::Drift => "DRIFT",
        }
    }
}

impl fmt::Display for DriftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
