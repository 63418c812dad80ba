// ueie-core/src/domain/drift/report.rs

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::drift::{DriftKind, Severity};

/// What was observed on a drifting column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftDetail {
    Message(String),
    Issues(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriftEntry {
    pub column: String,
    pub severity: Severity,
    pub kind: DriftKind,
    pub detail: DriftDetail,
}

// Wire shape of an entry: {"severity", "type", "message" | "issues"}.
#[derive(Serialize)]
struct EntryBody<'a> {
    severity: Severity,
    #[serde(rename = "type")]
    kind: DriftKind,
    #[serde(flatten)]
    detail: &'a DriftDetail,
}

/// Drifting columns keyed by name. A column appears at most once; empty means no drift.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DriftReport {
    entries: Vec<DriftEntry>,
}

impl DriftReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an entry, replacing any previous entry for the same column.
    pub fn record(&mut self, entry: DriftEntry) {
        match self.entries.iter_mut().find(|e| e.column == entry.column) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, column: &str) -> Option<&DriftEntry> {
        self.entries.iter().find(|e| e.column == column)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DriftEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest severity in the report, `None` when empty.
    pub fn max_severity(&self) -> Option<Severity> {
        self.entries.iter().map(|e| e.severity).max()
    }
}

impl Serialize for DriftReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(
                &entry.column,
                &EntryBody {
                    severity: entry.severity,
                    kind: entry.kind,
                    detail: &entry.detail,
                },
            )?;
        }
        map.end()
    }
}
