// ueie-core/src/domain/quality/rules.rs

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::domain::profile::DatasetProfile;

/// Columns with more missing cells than this (in percent) are flagged for removal.
pub const DROP_NULL_THRESHOLD: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemediationAction {
    DropColumn,
    FillUnknown,
    FillZero,
}

impl RemediationAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DropColumn => "drop_column",
            Self::FillUnknown => "fill_unknown",
            Self::FillZero => "fill_zero",
        }
    }
}

impl fmt::Display for RemediationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Remediation action per column, in profile order. Serialized as a JSON object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RemediationPlan {
    actions: Vec<(String, RemediationAction)>,
}

impl RemediationPlan {
    pub fn get(&self, column: &str) -> Option<RemediationAction> {
        self.actions
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, action)| *action)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, RemediationAction)> {
        self.actions.iter().map(|(name, action)| (name.as_str(), *action))
    }

    pub fn dropped_columns(&self) -> Vec<String> {
        self.actions
            .iter()
            .filter(|(_, action)| *action == RemediationAction::DropColumn)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Serialize for RemediationPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.actions.len()))?;
        for (name, action) in &self.actions {
            map.serialize_entry(name, action)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleEngine {
    drop_null_threshold: f64,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self {
            drop_null_threshold: DROP_NULL_THRESHOLD,
        }
    }
}

impl RuleEngine {
    pub fn new(drop_null_threshold: f64) -> Self {
        Self {
            drop_null_threshold,
        }
    }

    /// First match wins: too many nulls, then textual storage, then everything else.
    pub fn decide(&self, profile: &DatasetProfile) -> RemediationPlan {
        let actions = profile
            .iter()
            .map(|col| {
                let action = if col.null_pct > self.drop_null_threshold {
                    RemediationAction::DropColumn
                } else if col.dtype.is_textual() {
                    RemediationAction::FillUnknown
                } else {
                    RemediationAction::FillZero
                };
                (col.name.clone(), action)
            })
            .collect();

        RemediationPlan { actions }
    }
}
