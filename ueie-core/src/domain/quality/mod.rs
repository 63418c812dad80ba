// ueie-core/src/domain/quality/mod.rs

pub mod gate;
pub mod rules;
pub mod scorer;

pub use gate::{QualityGate, QualityStatus};
pub use rules::{RemediationAction, RemediationPlan, RuleEngine};
pub use scorer::QualityScorer;
