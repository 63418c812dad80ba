// ueie-core/src/domain/quality/scorer.rs

use crate::domain::profile::{DatasetProfile, round2};

/// Points subtracted per percent of missing cells, per column.
pub const NULL_PENALTY_WEIGHT: f64 = 0.2;

/// Weighted-penalty heuristic reducing a profile to a 0..=100 score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityScorer {
    null_penalty_weight: f64,
}

impl Default for QualityScorer {
    fn default() -> Self {
        Self {
            null_penalty_weight: NULL_PENALTY_WEIGHT,
        }
    }
}

impl QualityScorer {
    pub fn new(null_penalty_weight: f64) -> Self {
        Self {
            null_penalty_weight,
        }
    }

    pub fn score(&self, profile: &DatasetProfile) -> f64 {
        let penalty: f64 = profile
            .iter()
            .map(|col| col.null_pct * self.null_penalty_weight)
            .sum();
        round2(100.0 - penalty).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{ColumnProfile, DType};

    fn profile(null_pcts: &[f64]) -> DatasetProfile {
        null_pcts
            .iter()
            .enumerate()
            .map(|(i, pct)| ColumnProfile {
                name: format!("c{}", i),
                dtype: DType::Float,
                null_pct: *pct,
                unique_pct: 50.0,
            })
            .collect()
    }

    #[test]
    fn test_clean_profile_scores_100() {
        assert_eq!(QualityScorer::default().score(&profile(&[0.0, 0.0])), 100.0);
        assert_eq!(QualityScorer::default().score(&DatasetProfile::new()), 100.0);
    }

    #[test]
    fn test_penalty_is_weighted_sum() {
        // 100 - (10 + 25.5) * 0.2
        assert_eq!(QualityScorer::default().score(&profile(&[10.0, 25.5])), 92.9);
    }

    #[test]
    fn test_score_is_clamped_at_zero() {
        let score = QualityScorer::default().score(&profile(&[100.0; 8]));
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_score_stays_in_range() {
        let scorer = QualityScorer::default();
        for n in 0..20 {
            let pcts: Vec<f64> = (0..n).map(|i| (i * 17 % 101) as f64).collect();
            let score = scorer.score(&profile(&pcts));
            assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
        }
    }
}
